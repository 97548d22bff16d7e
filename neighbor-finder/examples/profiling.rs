use neighbor_finder::{NeighborFinder, PointSet, SimpleStructure, Vector3D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // enable collection of profiling data
    time_graph::enable_data_collection(true);
    // clear any existing collected data
    time_graph::clear_collected_data();

    let structures = (0..100).map(|i| cluster(50 + i)).collect::<Vec<_>>();
    let point_sets = structures.iter().map(|s| PointSet::from_structure(s)).collect::<Vec<_>>();

    let n_pairs = time_graph::spanned!("Full calculation", {
        let finder = NeighborFinder::from_json(r#"{"cutoff": 4.0}"#)?;
        let lists = finder.compute_all(&point_sets)?;
        lists.iter().map(|list| list.pairs().count()).sum::<usize>()
    });
    println!("found {} pairs", n_pairs);

    // get the call graph and display it
    let graph = time_graph::get_full_graph();
    // (this requires the "table" feature for the time_graph crate)
    println!("{}", graph.as_short_table());

    // also available for saving profiling data to the disk & future analysis
    // (this requires the "json" feature for the time_graph crate)
    println!("{}", graph.as_json());

    Ok(())
}

/// Atoms on a spiral, 1.4 A from one another
fn cluster(n_atoms: usize) -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    for i in 0..n_atoms {
        let angle = 0.7 * i as f64;
        let position = Vector3D::new(3.0 * angle.cos(), 3.0 * angle.sin(), 0.3 * i as f64);
        structure.add_site(6, position);
    }
    return structure;
}
