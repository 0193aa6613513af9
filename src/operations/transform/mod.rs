mod fit_viewport;

pub use fit_viewport::FitToViewport;
