//! End-to-end tuning tests
//!
//! Exercises the full pipeline: closed-loop simulation of a known-good
//! tuning, then a complete GA run over the standard search space.

use pid_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tuning_bounds() -> GainBounds {
    GainBounds::new(
        Bounds::new(2.0, 18.0).unwrap(),
        Bounds::new(1.05, 9.42).unwrap(),
        Bounds::new(0.26, 2.37).unwrap(),
    )
}

fn reference_loop(horizon_secs: f64) -> ClosedLoop<LeakyIntegrator> {
    let gains = PidGains::from_time_constants(2.0, 1.05, 0.26, 0.02);
    ClosedLoop::new(PidController::new(gains), LeakyIntegrator::default())
        .with_horizon(horizon_secs)
}

#[test]
fn reference_tuning_regulates_unit_step() {
    let mut sim = reference_loop(100.0);
    let response = sim.step_response();

    assert!(response.rise_time().is_some());
    assert!(response.settling_time().is_some());

    // Overshoot is mild for this tuning.
    if let Some(peak) = response.max_overshoot() {
        assert!(peak <= 1.25, "overshoot {} exceeds 25%", peak);
    }

    // The final 10% of the trajectory holds the 1% band.
    let samples = response.samples();
    for sample in &samples[samples.len() * 9 / 10..] {
        assert!(
            (sample.value - 1.0).abs() < 0.01,
            "sample at t={} is {}",
            sample.time,
            sample.value
        );
    }

    assert!(response.integral_squared_error() > 0.0);
}

#[test]
fn reference_tuning_scores_finite_cost() {
    let mut fitness = StepResponseFitness::new(reference_loop(100.0));
    let cost = fitness.evaluate(&GainVector::new(2.0, 1.05, 0.26));
    assert!(cost.is_finite());
    assert!(cost < PENALTY_FITNESS);
}

#[test]
fn ga_tunes_controller_over_standard_search_space() {
    let mut rng = StdRng::seed_from_u64(42);
    let bounds = tuning_bounds();

    let mut ga = GenerationalGa::builder()
        .population_size(50)
        .max_generations(150)
        .bounds(bounds)
        .selection(RouletteSelection::new())
        .crossover(WholeArithmeticCrossover::default())
        .mutation(UniformMutation::new(bounds, 0.25))
        .fitness(StepResponseFitness::new(reference_loop(15.0)))
        .build()
        .unwrap();

    let result = ga.run(&mut rng).unwrap();

    assert_eq!(result.generations, 150);
    assert!(bounds.contains_genes(result.best_genome.genes()));

    // The winner must be a feasible tuning, not a penalized one.
    assert!(result.best_fitness < PENALTY_FITNESS);

    // Elitism makes per-generation best costs non-increasing, so the final
    // result is at least as good as any member of the initial population.
    let history = result.stats.best_fitness_history();
    assert_eq!(history.len(), 151);
    for pair in history.windows(2) {
        assert!(pair[1] <= pair[0], "best cost regressed: {:?}", pair);
    }
    assert!(result.best_fitness <= history[0]);

    // The tuned gains actually regulate the plant.
    let mut sim = reference_loop(15.0);
    sim.apply_gain_vector(&result.best_genome);
    let response = sim.step_response();
    assert!(response.settling_time().is_some());
}

#[test]
fn seeded_tuning_runs_are_identical() {
    let bounds = tuning_bounds();
    let run = || {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ga = GenerationalGa::builder()
            .population_size(20)
            .max_generations(25)
            .bounds(bounds)
            .selection(RouletteSelection::new())
            .crossover(WholeArithmeticCrossover::default())
            .mutation(UniformMutation::new(bounds, 0.25))
            .fitness(StepResponseFitness::new(reference_loop(15.0)))
            .build()
            .unwrap();
        ga.run(&mut rng).unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first.best_genome, second.best_genome);
    assert_eq!(first.best_fitness, second.best_fitness);
    assert_eq!(
        first.stats.best_fitness_history(),
        second.stats.best_fitness_history()
    );
}
