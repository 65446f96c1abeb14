// main.rs
//
// Runs the contact finder on two meshes and prints what it recorded.
//
//   meshcontact                       two cubes, the second one moved 3 up
//   meshcontact A.stl B.stl [SAMPLE]  two STL files
//
// Needs the `cli` feature. Set RUST_LOG=meshcontact=debug to watch the sweep.

use meshcontact::io::IoError;
use meshcontact::traits::Transform;
use meshcontact::{ContactConfig, ContactError, Mesh, contact};
use tracing_subscriber::EnvFilter;

type Object = Mesh<String>;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(error) = run(std::env::args().skip(1).collect()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), ContactError> {
    let (mut objects, sample_size) = match args.as_slice() {
        [] => (demo_scene(), 1),
        [a, b] => (load_pair(a, b)?, ContactConfig::default().sample_size),
        [a, b, sample] => {
            let sample_size = sample.parse::<usize>().map_err(|_| {
                IoError::MalformedInput(format!("sample size '{sample}' is not a whole number"))
            })?;
            (load_pair(a, b)?, sample_size)
        },
        other => {
            return Err(ContactError::WrongSelection { found: other.len() });
        },
    };

    if let (Some(a), Some(b)) = (objects[0].bounding_box(), objects[1].bounding_box()) {
        if !a.intersects(&b) {
            tracing::warn!("bounding boxes are disjoint; contact pairs may be far apart");
        }
    }

    let config = ContactConfig::new(sample_size);
    let pairing = contact(&mut objects, &config)?;

    println!("threshold: {}", pairing.threshold);
    println!("pairs:     {}", pairing.len());
    for ((large, small), distance) in pairing.pairs().zip(&pairing.distances) {
        println!("  {large:>6} <-> {small:<6} {distance}");
    }
    for object in &objects {
        let name = object.metadata.as_deref().unwrap_or("?");
        for group in &object.vertex_groups {
            println!("{name}: group '{}' = {:?}", group.name, group.indices());
        }
    }
    Ok(())
}

fn demo_scene() -> Vec<Object> {
    let cube1 = Object::cube(2.0, Some("cube1".to_string())).center();
    let mut cube2 = cube1.translate(0.0, 0.0, 3.0);
    cube2.metadata = Some("cube2".to_string());
    vec![cube1, cube2]
}

#[cfg(feature = "stl-io")]
fn load_pair(a: &str, b: &str) -> Result<Vec<Object>, ContactError> {
    Ok(vec![
        Object::from_stl_file(a, Some(a.to_string()))?,
        Object::from_stl_file(b, Some(b.to_string()))?,
    ])
}

#[cfg(not(feature = "stl-io"))]
fn load_pair(_a: &str, _b: &str) -> Result<Vec<Object>, ContactError> {
    Err(IoError::MalformedInput(
        "built without the stl-io feature".to_string(),
    )
    .into())
}
