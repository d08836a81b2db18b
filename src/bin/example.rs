//! Member Diagrams Example - Simply Supported Beam

use member_diagrams::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Member Diagrams Example: Simply Supported Beam ===\n");

    // 6 m beam under a 20 kN/m uniform load, sampled at 5 stations.
    //
    //   w = 20 kN/m
    //   V(x) = w * (L/2 - x)
    //   M(x) = w * x * (L - x) / 2
    //
    let span = 6.0;
    let w = 20.0;
    let n_points = 5;

    let mut results = MemberResultSet::new(span);

    let stations: Vec<f64> = (0..n_points)
        .map(|i| span * i as f64 / (n_points - 1) as f64)
        .collect();

    let shear: Vec<f64> = stations.iter().map(|x| w * (span / 2.0 - x)).collect();
    let moment: Vec<f64> = stations.iter().map(|x| w * x * (span - x) / 2.0).collect();

    results
        .add_series(DiagramKind::ShearY, shear)
        .expect("Failed to add shear series");
    results
        .add_series(DiagramKind::MomentZ, moment)
        .expect("Failed to add moment series");

    // Scale ordinates down so the diagram fits next to the member geometry
    let builder = DiagramBuilder::new()
        .with_scale(0.02)
        .with_precision(2)
        .with_label_offset(0.1);

    for diagram in builder.build_all(&results).expect("Diagram build failed") {
        println!("--- {} diagram ---", diagram.kind);
        println!("  sample spacing: {:.2} m", diagram.dist);
        println!("  face loops: {}", diagram.loops.len());

        for (i, face) in diagram.loops.iter().enumerate() {
            let outline: Vec<String> = face
                .iter()
                .map(|p| format!("({:.2}, {:.3})", p.x, p.y))
                .collect();
            println!("  loop {}: {}", i, outline.join(" "));
        }

        println!("  labels:");
        for label in &diagram.labels {
            println!("    {} at ({:.2}, {:.3})", label.text, label.x, label.y);
        }
        println!();
    }

    // Renderer-ready JSON, as a CAD integration would consume it
    let moment_diagram = builder
        .build(&results, DiagramKind::MomentZ)
        .expect("Diagram build failed");
    let json = serde_json::to_string_pretty(&moment_diagram).expect("Serialization failed");
    println!("=== MomentZ diagram as JSON ===\n{}", json);
}
