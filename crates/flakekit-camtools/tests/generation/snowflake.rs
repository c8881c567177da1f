use flakekit_camtools::{
    assemble_star, ArmGenerator, CamToolError, ParameterError, SnowflakeGenerator,
    SnowflakeParameters, MAX_SPIKES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn three_spike_params() -> SnowflakeParameters {
    SnowflakeParameters {
        arm_length: 20.0,
        arm_thickness: 1.0,
        min_spikes: 3,
        max_spikes: 3,
        seed: Some(11),
        ..Default::default()
    }
}

#[test]
fn test_three_spike_counts() {
    let generator = ArmGenerator::new(three_spike_params()).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let half = generator.half_arm(3, &mut rng).unwrap();
    assert_eq!(half.len(), 1 + 3 * 3 + 1);

    let (arm, _) = generator.assemble(&half);
    assert_eq!(arm.len(), 11 + 1 + 11);

    let star = assemble_star(&arm);
    assert_eq!(star.len(), 23 * 6);
}

#[test]
fn test_generator_counts_match_stages() {
    let flake = SnowflakeGenerator::new(three_spike_params())
        .unwrap()
        .generate()
        .unwrap();
    assert_eq!(flake.spike_count(), 3);
    assert_eq!(flake.arm.toolpath.len(), 23);
    assert_eq!(flake.star.len(), 138);
}

#[test]
fn test_injected_rng_matches_seed() {
    let generator = SnowflakeGenerator::new(three_spike_params()).unwrap();
    let from_seed = generator.generate().unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let injected = generator.generate_with_rng(&mut rng).unwrap();
    assert_eq!(from_seed, injected);
}

#[test]
fn test_different_seeds_differ() {
    let a = SnowflakeGenerator::new(SnowflakeParameters {
        seed: Some(1),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap();
    let b = SnowflakeGenerator::new(SnowflakeParameters {
        seed: Some(2),
        ..Default::default()
    })
    .unwrap()
    .generate()
    .unwrap();
    assert_ne!(a.to_gcode(), b.to_gcode());
}

#[test]
fn test_star_arms_are_rotations_of_base_arm() {
    let flake = SnowflakeGenerator::new(three_spike_params())
        .unwrap()
        .generate()
        .unwrap();
    let arm = flake.arm.toolpath.commands();

    for (k, copy) in flake.star.commands().chunks(arm.len()).enumerate() {
        let theta = (-60.0 * (k + 1) as f64).to_radians();
        for (base, rotated) in arm.iter().zip(copy) {
            let expected = base.rotated(theta);
            assert!((expected.x - rotated.x).abs() < 1e-9);
            assert!((expected.y - rotated.y).abs() < 1e-9);
            assert_eq!(base.z, rotated.z);
        }
    }

    // the sixth copy is back at the base orientation
    let last_copy = &flake.star.commands()[5 * arm.len()..];
    for (base, rotated) in arm.iter().zip(last_copy) {
        assert!((base.x - rotated.x).abs() < 1e-9);
        assert!((base.y - rotated.y).abs() < 1e-9);
    }
}

#[test]
fn test_arm_stays_within_envelope() {
    let params = SnowflakeParameters {
        seed: Some(77),
        ..Default::default()
    };
    let flake = SnowflakeGenerator::new(params.clone())
        .unwrap()
        .generate()
        .unwrap();
    let radius_limit = params.tip_x() + 1e-9;
    for command in &flake.star {
        assert!(command.x.hypot(command.y) <= radius_limit + params.arm_length);
    }
    for command in &flake.arm.toolpath {
        assert!(command.x <= params.tip_x() + 2.0 * params.spacer + params.arm_length / 2.0);
    }
}

#[test]
fn test_validation_fails_fast() {
    let err = SnowflakeGenerator::new(SnowflakeParameters {
        min_spikes: 0,
        max_spikes: 0,
        ..Default::default()
    })
    .unwrap_err();

    match err {
        CamToolError::Parameter(ParameterError::OutOfRange { name, range, .. }) => {
            assert_eq!(name, "min_spikes");
            assert_eq!(range, ">= 1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_overflowing_arm_rejected_before_generation() {
    let result = SnowflakeGenerator::new(SnowflakeParameters {
        arm_length: 1.7e308,
        seed: Some(1),
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(CamToolError::Parameter(ParameterError::InvalidValue { .. }))
    ));
}

#[test]
fn test_spike_count_above_bound_rejected() {
    let generator = ArmGenerator::new(SnowflakeParameters::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    assert!(generator.half_arm(MAX_SPIKES + 1, &mut rng).is_err());
    assert_eq!(
        generator.half_arm(MAX_SPIKES, &mut rng).unwrap().len(),
        3 * MAX_SPIKES as usize + 2
    );
}
