use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cardioseg::cli::{Cli, ClassifyArgs, Command, TrainArgs};
use cardioseg::{
    elbow, kmeans, patient, sha256_file, ClinicalDataset, ClusterSummary, ModelArtifact,
    ScalerArtifact, StandardScaler, DEFAULT_MAX_ITER, ELBOW_FILE, SUMMARY_FILE,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Train(args) => run_train(args),
        Command::Classify(args) => run_classify(args),
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    let start_time = Instant::now();
    println!("=== cardioseg: Heart-Failure Risk Segmentation ===\n");

    // Step 1: Load the clinical records
    let step1_start = Instant::now();
    println!("Step 1: Loading clinical records...");
    let dataset = ClinicalDataset::load(&args.data)?;
    println!(
        "✓ Loaded {} records with {} feature columns [{:.2}s]",
        dataset.n_records(),
        dataset.n_features(),
        step1_start.elapsed().as_secs_f64()
    );
    println!("  Features used: {}\n", dataset.feature_names.join(", "));

    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.out_dir.display()
        )
    })?;
    let dataset_sha256 = sha256_file(&args.data)?;

    // Step 2: Standardize the feature matrix and persist the scaler
    let step2_start = Instant::now();
    println!("Step 2: Standardizing features...");
    let scaler = StandardScaler::fit(&dataset.rows)?;
    let scaled = scaler.transform(&dataset.rows)?;
    let scaler_artifact = ScalerArtifact::new(
        scaler,
        dataset.feature_names.clone(),
        dataset_sha256.clone(),
    );
    scaler_artifact.save(&args.out_dir)?;
    println!(
        "✓ Features standardized, scaler persisted [{:.2}s]\n",
        step2_start.elapsed().as_secs_f64()
    );

    // Step 3: Elbow sweep over candidate cluster counts
    let step3_start = Instant::now();
    println!(
        "Step 3: Sweeping K=1..{} for the elbow curve...",
        args.sweep_max
    );
    let curve = elbow::sweep(
        &scaled,
        1..=args.sweep_max,
        DEFAULT_MAX_ITER,
        args.restarts,
        args.seed,
    )?;
    elbow::write_csv(&curve, &args.out_dir.join(ELBOW_FILE))?;
    println!(
        "✓ Sweep complete [{:.2}s]\n",
        step3_start.elapsed().as_secs_f64()
    );
    println!("{}", elbow::render_chart(&curve));
    println!(
        "Inspect the curve, then rerun with --clusters <K> if {} is not the elbow.\n",
        args.clusters
    );

    // Step 4: Fit the final clusterer at the chosen K and persist it
    let step4_start = Instant::now();
    println!("Step 4: Fitting final model at K={}...", args.clusters);
    let fit = kmeans(
        &scaled,
        args.clusters,
        DEFAULT_MAX_ITER,
        args.restarts,
        args.seed,
    )?;
    ModelArtifact::new(fit.model.clone(), dataset_sha256).save(&args.out_dir)?;
    println!(
        "✓ Converged in {} iterations, WCSS {:.2}, clusterer persisted [{:.2}s]\n",
        fit.iterations,
        fit.model.inertia,
        step4_start.elapsed().as_secs_f64()
    );

    // Step 5: Describe the clusters on the original feature scale
    let step5_start = Instant::now();
    println!("Step 5: Summarizing clusters...");
    let summary = ClusterSummary::build(&fit.labels, &dataset, args.clusters);
    summary.write_csv(&args.out_dir.join(SUMMARY_FILE))?;
    println!(
        "✓ Summary written [{:.2}s]\n",
        step5_start.elapsed().as_secs_f64()
    );

    println!("=== Cluster Description (means of original features) ===");
    println!("{}", summary.render());
    println!(
        "Total: {} patients across {} clusters [{:.2}s]",
        summary.total_count(),
        args.clusters,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    println!("=== cardioseg: New Patient Classification ===\n");

    let scaler_artifact = ScalerArtifact::load(&args.artifacts_dir)?;
    let model_artifact = ModelArtifact::load(&args.artifacts_dir)?;

    let record = match &args.patient {
        Some(path) => {
            println!("Classifying patient record from {}", path.display());
            patient::load_record(path)?
        }
        None => {
            println!("No patient file given; using the built-in example record.");
            patient::example()
        }
    };

    // transform only, with the training-time statistics and column order
    let ordered = patient::order_features(&record, &scaler_artifact.feature_columns)?;
    let standardized = scaler_artifact.scaler.transform_row(&ordered)?;
    let cluster = model_artifact.model.predict(&standardized)?;

    println!("\n==================================================");
    println!("The new patient belongs to cluster: {}", cluster);
    println!("==================================================");
    println!(
        "See {} for the centroid table to interpret the risk profile.",
        SUMMARY_FILE
    );

    Ok(())
}
