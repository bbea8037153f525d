mod dataset;
mod municipality;
mod parish;
mod state;

pub use dataset::Dataset;
pub use municipality::Municipality;
pub use parish::Parish;
pub use state::State;
