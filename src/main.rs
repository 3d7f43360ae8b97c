use std::f64::consts::PI;
use complex_double::Complex;
use log::{debug, info};

const FUNCTIONS: [(&str, fn(Complex) -> Complex); 15] = [
    ("ln", Complex::ln),
    ("log10", Complex::log10),
    ("exp", Complex::exp),
    ("sin", Complex::sin),
    ("cos", Complex::cos),
    ("tan", Complex::tan),
    ("asin", Complex::asin),
    ("acos", Complex::acos),
    ("atan", Complex::atan),
    ("sinh", Complex::sinh),
    ("cosh", Complex::cosh),
    ("tanh", Complex::tanh),
    ("asinh", Complex::asinh),
    ("acosh", Complex::acosh),
    ("atanh", Complex::atanh),
];

fn main() {
    env_logger::init();

    let points = [
        Complex::from(0.5_f64),
        Complex::from(-1_i32),
        Complex::I,
        Complex::new(1_f64, 1_f64),
        Complex::from_polar(2_f64, PI / 3_f64),
    ];
    info!("evaluating {} functions at {} points", FUNCTIONS.len(), points.len());

    for z in points {
        debug!("z = {z}, radius {}, angle {}", z.radius(), z.angle());
        println!("z = {z}");
        println!("  {:>6}(z) = {}", "sqrt", z.powf(0.5));
        for (name, f) in FUNCTIONS.iter() {
            let w = f(z);
            if !w.is_finite() {
                debug!("{name}({z}) left the finite range: {w}");
            }
            println!("  {:>6}(z) = {}", name, w);
        }
    }
}
