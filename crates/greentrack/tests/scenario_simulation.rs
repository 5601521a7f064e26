use greentrack::analysis::{
    assess_footprint, simulate, Badge, BusinessCategory, EmissionFactors, ScenarioInput,
    UsageRecord,
};

fn warehouse() -> UsageRecord {
    UsageRecord {
        category: BusinessCategory::Warehouse,
        employees: 18,
        yearly_revenue: None,
        electricity_kwh: 3200.0,
        water_liters: 1500.0,
        waste_kg: 420.0,
        fuel_liters: 310.0,
    }
}

#[test]
fn zero_knobs_reproduce_the_footprint() {
    let base = warehouse();
    let original = assess_footprint(&base, &EmissionFactors::STANDARD);
    let projection = simulate(&base, &ScenarioInput::default(), &EmissionFactors::STANDARD);

    assert_eq!(projection.original_footprint, original);
    assert_eq!(projection.new_footprint, original);
    assert_eq!(projection.badge, Badge::Bronze);
}

#[test]
fn reductions_are_applied_per_resource() {
    let base = warehouse();
    let knobs = ScenarioInput {
        electricity: 50.0,
        water: 0.0,
        waste: 0.0,
        fuel: 0.0,
    };
    let projection = simulate(&base, &knobs, &EmissionFactors::STANDARD);

    let original = &projection.original_footprint.breakdown;
    let projected = &projection.new_footprint.breakdown;
    assert!((projected.electricity - original.electricity / 2.0).abs() < 1e-9);
    assert_eq!(projected.water, original.water);
    assert_eq!(projected.waste, original.waste);
    assert_eq!(projected.fuel, original.fuel);
    assert!(
        (projection.reduction - original.electricity / 2.0).abs() < 1e-9,
        "reduction equals the electricity saved"
    );
}

#[test]
fn stronger_scenarios_never_earn_lower_badges() {
    let base = warehouse();
    let mut previous = Badge::Bronze;
    for step in 0..=10 {
        let share = f64::from(step) / 10.0;
        let knobs = ScenarioInput {
            electricity: 50.0 * share,
            water: 40.0 * share,
            waste: 50.0 * share,
            fuel: 40.0 * share,
        };
        let projection = simulate(&base, &knobs, &EmissionFactors::STANDARD);
        assert!(projection.badge >= previous);
        previous = projection.badge;
    }
}
