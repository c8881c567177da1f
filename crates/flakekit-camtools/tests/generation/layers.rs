use flakekit_camtools::{SnowflakeGenerator, SnowflakeParameters};
use flakekit_core::{Marker, Program, ProgramLine};

fn seven_layer_flake() -> flakekit_camtools::Snowflake {
    SnowflakeGenerator::new(SnowflakeParameters {
        layer_count: 7,
        layer_thickness: 0.35,
        seed: Some(2015),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap()
}

#[test]
fn test_marker_layout() {
    let flake = seven_layer_flake();
    let star_len = flake.star.len();
    let lines = flake.program.lines();

    // base pass + stop
    let mut cursor = star_len;
    assert!(lines[..star_len].iter().all(|l| l.as_move().is_some()));
    assert!(lines[cursor].is_marker(Marker::StopExtrusion));
    cursor += 1;

    // seven (start, body, stop) groups
    for _ in 0..7 {
        assert!(lines[cursor].is_marker(Marker::StartExtrusion));
        cursor += 1;
        assert!(lines[cursor..cursor + star_len]
            .iter()
            .all(|l| l.as_move().is_some()));
        cursor += star_len;
        assert!(lines[cursor].is_marker(Marker::StopExtrusion));
        cursor += 1;
    }

    // lift-off + heater off
    assert!(lines[cursor].as_move().is_some());
    assert!(lines[cursor + 1].is_marker(Marker::HeaterOff));
    assert_eq!(lines.len(), cursor + 2);
}

#[test]
fn test_layer_heights() {
    let flake = seven_layer_flake();
    let star_len = flake.star.len();
    let lines = flake.program.lines();
    let base_z = 1.11;

    for k in 0..=7usize {
        // layer k body starts after the base pass, its stop and k-1 full groups
        let start = if k == 0 {
            0
        } else {
            star_len + 1 + (k - 1) * (star_len + 2) + 1
        };
        for line in &lines[start..start + star_len] {
            let command = line.as_move().unwrap();
            let expected = base_z + k as f64 * 0.35;
            assert!(
                (command.z - expected).abs() < 1e-9,
                "layer {k}: z {} expected {expected}",
                command.z
            );
        }
    }
}

#[test]
fn test_lift_off_and_shutdown_text() {
    let flake = seven_layer_flake();
    let gcode = flake.to_gcode();
    let tail: Vec<&str> = gcode.lines().rev().take(2).collect();
    assert_eq!(tail, vec!["M104 S0", "G1 X22.00 Y0.00 Z11.11 F1500"]);
}

#[test]
fn test_text_round_trips_through_parser() {
    let flake = seven_layer_flake();
    let reparsed = Program::parse(&flake.to_gcode()).unwrap();
    assert_eq!(reparsed.len(), flake.program.len());
    assert_eq!(reparsed.marker_count(Marker::StartExtrusion), 7);
    assert_eq!(reparsed.marker_count(Marker::StopExtrusion), 8);

    // every printed coordinate has exactly two fractional digits
    for line in flake.to_gcode().lines().filter(|l| l.starts_with("G1")) {
        for word in line.split_whitespace().skip(1) {
            if word.starts_with('F') {
                assert!(word[1..].chars().all(|c| c.is_ascii_digit()));
            } else {
                let value = &word[1..];
                let (_, frac) = value.split_once('.').unwrap();
                assert_eq!(frac.len(), 2, "bad word {word} in {line}");
                assert_ne!(value, "-0.00");
            }
        }
    }
    assert!(matches!(reparsed.lines()[0], ProgramLine::Move(_)));
}

#[test]
fn test_zero_layers_only_base_pass() {
    let flake = SnowflakeGenerator::new(SnowflakeParameters {
        layer_count: 0,
        seed: Some(3),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap();
    assert_eq!(flake.program.len(), flake.star.len() + 3);
    assert_eq!(flake.program.marker_count(Marker::StartExtrusion), 0);
}
