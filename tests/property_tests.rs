//! Property-based tests for pid-evo
//!
//! Uses proptest to verify invariants of the genome, the operators, and the
//! simulation.

use pid_evo::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_bounds() -> impl Strategy<Value = GainBounds> {
    (0.1f64..10.0, 0.1f64..10.0, 0.1f64..10.0, 1.0f64..20.0).prop_map(
        |(lo_p, lo_i, lo_d, width)| {
            GainBounds::new(
                Bounds::new(lo_p, lo_p + width).unwrap(),
                Bounds::new(lo_i, lo_i + width).unwrap(),
                Bounds::new(lo_d, lo_d + width).unwrap(),
            )
        },
    )
}

proptest! {
    // ==================== GainVector Properties ====================

    #[test]
    fn generated_genome_within_bounds(bounds in arb_bounds(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genome = GainVector::generate(&mut rng, &bounds);
        prop_assert!(bounds.contains_genes(genome.genes()));
    }

    #[test]
    fn apply_bounds_always_lands_inside(
        bounds in arb_bounds(),
        k_p in -100.0f64..100.0,
        t_i in -100.0f64..100.0,
        t_d in -100.0f64..100.0
    ) {
        let mut genome = GainVector::new(k_p, t_i, t_d);
        genome.apply_bounds(&bounds);
        prop_assert!(bounds.contains_genes(genome.genes()));
    }

    #[test]
    fn distance_is_symmetric_and_non_negative(
        a in prop::array::uniform3(-10.0f64..10.0),
        b in prop::array::uniform3(-10.0f64..10.0)
    ) {
        let g1 = GainVector::from(a);
        let g2 = GainVector::from(b);
        prop_assert!(g1.distance(&g2) >= 0.0);
        prop_assert!((g1.distance(&g2) - g2.distance(&g1)).abs() < 1e-10);
        prop_assert!(g1.distance(&g1) < 1e-10);
    }

    // ==================== Operator Properties ====================

    #[test]
    fn uniform_mutation_respects_bounds(
        bounds in arb_bounds(),
        probability in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutation = UniformMutation::new(bounds, probability);
        let mut genome = GainVector::generate(&mut rng, &bounds);
        mutation.mutate(&mut genome, &mut rng);
        prop_assert!(bounds.contains_genes(genome.genes()));
    }

    #[test]
    fn gaussian_mutation_respects_bounds(
        bounds in arb_bounds(),
        sigma in 0.0f64..50.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutation = GaussianMutation::new(bounds, sigma, 1.0);
        let mut genome = GainVector::generate(&mut rng, &bounds);
        mutation.mutate(&mut genome, &mut rng);
        prop_assert!(bounds.contains_genes(genome.genes()));
    }

    #[test]
    fn arithmetic_crossover_children_bounded_by_parents(
        bounds in arb_bounds(),
        alpha in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let crossover = WholeArithmeticCrossover::new(alpha);
        let p1 = GainVector::generate(&mut rng, &bounds);
        let p2 = GainVector::generate(&mut rng, &bounds);

        let (c1, c2) = crossover.crossover(&p1, &p2, &mut rng);
        for j in 0..NUM_GAINS {
            let lo = p1[j].min(p2[j]) - 1e-12;
            let hi = p1[j].max(p2[j]) + 1e-12;
            prop_assert!(c1[j] >= lo && c1[j] <= hi);
            prop_assert!(c2[j] >= lo && c2[j] <= hi);
        }
    }

    #[test]
    fn roulette_selection_returns_valid_index(
        costs in prop::collection::vec(0.01f64..1000.0, 1..50),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool: Vec<(GainVector, f64)> = costs
            .iter()
            .map(|&c| (GainVector::new(c, 1.0, 1.0), c))
            .collect();
        let idx = RouletteSelection::new().select(&pool, &mut rng);
        prop_assert!(idx < pool.len());
    }

    // ==================== Simulation Properties ====================

    #[test]
    fn controller_output_always_saturated(
        k_p in 0.0f64..50.0,
        t_i in 0.1f64..10.0,
        t_d in 0.0f64..5.0,
        measurements in prop::collection::vec(-5.0f64..5.0, 1..200)
    ) {
        let gains = PidGains::from_time_constants(k_p, t_i, t_d, 0.02);
        let mut pid = PidController::new(gains);
        for m in measurements {
            let out = pid.transform(m);
            prop_assert!(out >= PidController::OUTPUT_MIN);
            prop_assert!(out <= PidController::OUTPUT_MAX);
        }
    }

    #[test]
    fn step_response_is_deterministic(
        k_p in 2.0f64..18.0,
        t_i in 1.05f64..9.42,
        t_d in 0.26f64..2.37
    ) {
        let gains = PidGains::from_time_constants(k_p, t_i, t_d, 0.02);
        let mut a = ClosedLoop::new(PidController::new(gains), LeakyIntegrator::default())
            .with_horizon(5.0);
        let mut b = a.clone();
        let resp_a = a.step_response();
        let resp_b = b.step_response();
        prop_assert_eq!(resp_a.samples(), resp_b.samples());
    }

    #[test]
    fn ise_is_non_negative(
        k_p in 2.0f64..18.0,
        t_i in 1.05f64..9.42,
        t_d in 0.26f64..2.37
    ) {
        let gains = PidGains::from_time_constants(k_p, t_i, t_d, 0.02);
        let mut sim = ClosedLoop::new(PidController::new(gains), LeakyIntegrator::default())
            .with_horizon(5.0);
        prop_assert!(sim.step_response().integral_squared_error() >= 0.0);
    }

    #[test]
    fn overshoot_never_below_setpoint(
        k_p in 2.0f64..18.0,
        t_i in 1.05f64..9.42,
        t_d in 0.26f64..2.37
    ) {
        let gains = PidGains::from_time_constants(k_p, t_i, t_d, 0.02);
        let mut sim = ClosedLoop::new(PidController::new(gains), LeakyIntegrator::default())
            .with_horizon(10.0);
        let response = sim.step_response();
        if let Some(peak) = response.max_overshoot() {
            prop_assert!(peak >= response.setpoint());
        }
    }
}
