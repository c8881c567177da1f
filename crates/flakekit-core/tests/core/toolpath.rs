use flakekit_core::{MotionCommand, Toolpath};
use std::f64::consts::PI;

fn arm_like() -> Toolpath {
    Toolpath::from(vec![
        MotionCommand::new(1.0, 0.5, 1.11, 1500),
        MotionCommand::new(4.2, 3.1, 1.11, 1500),
        MotionCommand::new(5.0, 0.5, 1.11, 1500),
        MotionCommand::new(20.0, 0.5, 1.11, 1500),
    ])
}

#[test]
fn test_extend_copies_without_touching_source() {
    let source = arm_like();
    let mut target = Toolpath::new();
    target.extend(&source);
    target.extend(&source);

    assert_eq!(target.len(), 8);
    assert_eq!(source, arm_like());

    target.rotate(PI / 3.0);
    target.raise_z(0.35);
    target.mirror_across_x_axis();
    assert_eq!(source, arm_like());
}

#[test]
fn test_source_mutation_does_not_reach_extended_copy() {
    let mut source = arm_like();
    let mut target = Toolpath::new();
    target.extend(&source);

    source.raise_z(100.0);
    source.mirror_across_x_axis();
    assert_eq!(target, arm_like());
}

#[test]
fn test_clone_is_independent() {
    let source = arm_like();
    let mut copy = source.clone();
    assert_eq!(copy, source);

    copy.reverse_order();
    copy.raise_z(1.0);
    assert_ne!(copy, source);
    assert_eq!(source, arm_like());
}

#[test]
fn test_mirror_then_reverse_builds_return_edge() {
    let half = arm_like();
    let mut other_half = half.clone();
    other_half.mirror_across_x_axis();
    other_half.reverse_order();

    let first = other_half.first().unwrap();
    let last = other_half.last().unwrap();
    assert_eq!((first.x, first.y), (20.0, -0.5));
    assert_eq!((last.x, last.y), (1.0, -0.5));
}

#[test]
fn test_six_sixty_degree_steps_cover_the_circle() {
    let start = MotionCommand::new(10.0, 0.0, 0.0, 1500);
    let mut point = start;
    let mut angles = Vec::new();
    for _ in 0..6 {
        point.rotate((-60.0f64).to_radians());
        let degrees = point.y.atan2(point.x).to_degrees().rem_euclid(360.0);
        angles.push((degrees.round() as i64) % 360);
    }
    angles.sort();
    assert_eq!(angles, vec![0, 60, 120, 180, 240, 300]);
    assert!((point.x - start.x).abs() < 1e-9);
    assert!((point.y - start.y).abs() < 1e-9);
}

#[test]
fn test_serialize_joins_lines() {
    let text = arm_like().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "G1 X4.20 Y3.10 Z1.11 F1500");
    assert!(!text.ends_with('\n'));
}
