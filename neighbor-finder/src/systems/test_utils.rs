use crate::Vector3D;
use super::SimpleStructure;

pub fn test_structures(names: &[&str]) -> Vec<SimpleStructure> {
    return names.iter().map(|&name| test_structure(name)).collect();
}

pub fn test_structure(name: &str) -> SimpleStructure {
    match name {
        "methane" => get_methane(),
        "water" => get_water(),
        "CH" => get_ch(),
        "dimer" => get_dimer(),
        "chain" => get_chain(),
        "duplicated" => get_duplicated(),
        _ => panic!("unknown test structure {}", name)
    }
}

fn get_methane() -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    structure.add_site(6, Vector3D::new(5.0000, 5.0000, 5.0000));
    structure.add_site(1, Vector3D::new(5.5288, 5.1610, 5.9359));
    structure.add_site(1, Vector3D::new(5.2051, 5.8240, 4.3214));
    structure.add_site(1, Vector3D::new(5.3345, 4.0686, 4.5504));
    structure.add_site(1, Vector3D::new(3.9315, 4.9463, 5.1921));
    return structure;
}

fn get_water() -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    // types do not have to be atomic number
    structure.add_site(-42, Vector3D::new(0.0, 0.0, 0.0));
    structure.add_site(1, Vector3D::new(0.0, 0.75545, -0.58895));
    structure.add_site(1, Vector3D::new(0.0, -0.75545, -0.58895));
    return structure;
}

fn get_ch() -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    structure.add_site(6, Vector3D::new(0.0, 0.0, 0.0));
    structure.add_site(1, Vector3D::new(0.0, 1.2, 0.0));
    return structure;
}

/// Two sites exactly 5 A apart
fn get_dimer() -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    structure.add_site(8, Vector3D::new(0.0, 0.0, 0.0));
    structure.add_site(8, Vector3D::new(3.0, 4.0, 0.0));
    return structure;
}

/// Three sites on a line, the last one far away from the others
fn get_chain() -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    structure.add_site(6, Vector3D::new(0.0, 0.0, 0.0));
    structure.add_site(6, Vector3D::new(1.0, 0.0, 0.0));
    structure.add_site(6, Vector3D::new(10.0, 0.0, 0.0));
    return structure;
}

/// Sites 0 and 1 are numerically the same site
fn get_duplicated() -> SimpleStructure {
    let mut structure = SimpleStructure::new();
    structure.add_site(1, Vector3D::new(0.0, 0.0, 0.0));
    structure.add_site(1, Vector3D::new(0.0, 0.0, 5e-9));
    structure.add_site(1, Vector3D::new(0.0, 0.0, 1.0));
    return structure;
}
