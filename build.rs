use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const TABLE_DEPTH: usize = 20;

fn compute_theta_table() -> [f64; TABLE_DEPTH] {
    (0..TABLE_DEPTH)
        .map(|i| f64::atan2(1.0, f64::powf(2.0, i as _)))
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn compute_cosine_table() -> [f64; TABLE_DEPTH] {
    compute_theta_table()
        .iter()
        .map(|theta| theta.cos())
        .collect::<Vec<f64>>()
        .try_into()
        .unwrap()
}

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("cordic_tables.rs");
    let mut f = File::create(dest_path).unwrap();

    let theta_table = compute_theta_table();
    writeln!(&mut f, "#[allow(clippy::approx_constant)]").unwrap();
    writeln!(&mut f, "pub(crate) const THETA_TABLE: [f64; {}] = {:?};", theta_table.len(), theta_table).unwrap();
    let cosine_table = compute_cosine_table();
    writeln!(&mut f, "pub(crate) const COSINE_TABLE: [f64; {}] = {:?};", cosine_table.len(), cosine_table).unwrap();
}
