use garenne_sim::simulation::{Configuration, PopulationSnapshot, Sex, AGE_CLASSES};

/// Echo the effective run parameters before simulating.
pub fn print_parameters(config: &Configuration) {
    let execution = &config.execution;
    let birth = &config.demography.birth;
    let mortality = &config.demography.mortality;

    println!("\n📋 Simulation Configuration");
    println!("  • Years: {} [-y, --years]", execution.total_years);
    if let Some(seed) = execution.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }

    println!("\n🐇 Initial Population");
    for cohort in &config.initial.cohorts {
        println!(
            "  • Age {}: {} females [--females] × {} males [--males]",
            cohort.age, cohort.females, cohort.males
        );
    }
    if config.initial.cohorts.is_empty() {
        println!("  • (empty)");
    }

    println!("\n⚡ Birth Model");
    println!(
        "  • Litters per Year: {}-{} (weighted toward the middle)",
        birth.litter_min(),
        birth.litter_max()
    );
    let (kits_min, kits_max) = birth.kits_range();
    println!("  • Kits per Litter: {kits_min}-{kits_max} (equiprobable)");
    println!(
        "  • Sex Split: {:.0}% female / {:.0}% male",
        birth.female_prob() * 100.0,
        (1.0 - birth.female_prob()) * 100.0
    );

    println!("\n💀 Mortality Model");
    println!(
        "  • Infant Survival: {:.0}%",
        mortality.infant_survival() * 100.0
    );
    println!(
        "  • Adult Survival: {:.0}% (ages 1-9)",
        mortality.adult_survival() * 100.0
    );
    println!(
        "  • Old-age Decline: -10 pts/year from age 10 ({:.0}% at 10, 0% at 15)",
        mortality.survival_threshold(10) * 100.0
    );
    println!();
}

/// Render the full snapshot sequence as per-year cohort tables, one row per
/// sex/status and one column per age class.
pub fn print_snapshot_tables(snapshots: &[PopulationSnapshot]) {
    print!("{:<15}", "Age");
    for age in 0..AGE_CLASSES {
        print!("{age:>10}");
    }
    println!();

    for (year, snapshot) in snapshots.iter().enumerate() {
        println!("\nYear {year}");
        print_row("Females alive", snapshot.alive_row(Sex::Female));
        print_row("Females dead", snapshot.dead_row(Sex::Female));
        print_row("Males alive", snapshot.alive_row(Sex::Male));
        print_row("Males dead", snapshot.dead_row(Sex::Male));
    }
}

fn print_row(label: &str, row: &[u64; AGE_CLASSES]) {
    print!("{label:<15}");
    for count in row {
        print!("{count:>10}");
    }
    println!();
}
