pub mod components;
pub mod inline;
pub mod lists;
pub mod marks;
pub mod renderer;
pub mod renders;
pub mod tables;
pub mod traits;

pub use components::*;
pub use inline::*;
pub use lists::*;
pub use marks::*;
pub use renderer::*;
pub use renders::*;
pub use tables::*;
pub use traits::*;
