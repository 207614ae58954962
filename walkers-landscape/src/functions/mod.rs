//! Benchmark landscape formulas, one module per function.

pub mod ackley;
pub mod beale;
pub mod booth;
pub mod bukin_n6;
pub mod cross_in_tray;
pub mod dixon_price;
pub mod drop_wave;
pub mod easom;
pub mod eggholder;
pub mod griewank;
pub mod himmelblau;
pub mod holder_table;
pub mod levy;
pub mod levy_n13;
pub mod matyas;
pub mod mccormick;
pub mod rastrigin;
pub mod rosenbrock;
pub mod schaffer_n2;
pub mod schaffer_n4;
pub mod schwefel;
pub mod shubert;
pub mod six_hump_camel;
pub mod sphere;
pub mod three_hump_camel;
pub mod zakharov;

pub use ackley::{ACKLEY, ackley};
pub use beale::{BEALE, beale};
pub use booth::{BOOTH, booth};
pub use bukin_n6::{BUKIN_N6, bukin_n6};
pub use cross_in_tray::{CROSS_IN_TRAY, cross_in_tray};
pub use dixon_price::{DIXON_PRICE, dixon_price};
pub use drop_wave::{DROP_WAVE, drop_wave};
pub use easom::{EASOM, easom};
pub use eggholder::{EGGHOLDER, eggholder};
pub use griewank::{GRIEWANK, griewank};
pub use himmelblau::{HIMMELBLAU, himmelblau};
pub use holder_table::{HOLDER_TABLE, holder_table};
pub use levy::{LEVY, levy};
pub use levy_n13::{LEVY_N13, levy_n13};
pub use matyas::{MATYAS, matyas};
pub use mccormick::{MCCORMICK, mccormick};
pub use rastrigin::{RASTRIGIN, rastrigin};
pub use rosenbrock::{ROSENBROCK, rosenbrock};
pub use schaffer_n2::{SCHAFFER_N2, schaffer_n2};
pub use schaffer_n4::{SCHAFFER_N4, schaffer_n4};
pub use schwefel::{SCHWEFEL, schwefel};
pub use shubert::{SHUBERT, shubert};
pub use six_hump_camel::{SIX_HUMP_CAMEL, six_hump_camel};
pub use sphere::{SPHERE, sphere};
pub use three_hump_camel::{THREE_HUMP_CAMEL, three_hump_camel};
pub use zakharov::{ZAKHAROV, zakharov};
