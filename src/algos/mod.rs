pub use self::algo::Algo;
pub use self::flow::MinCostFlow;
pub use self::hungarian::Hungarian;

mod algo;
mod flow;
mod hungarian;
