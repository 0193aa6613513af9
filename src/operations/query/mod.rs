mod locate_point;

pub use locate_point::{LocatePoint, LocateReport, Predicate};
