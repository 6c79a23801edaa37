pub mod application;
pub mod error;
pub mod navigation;
pub mod route;
pub mod view;

pub use error::{Error, Result};

// Re-export common types for convenience
pub use application::Application;
pub use navigation::NavigationState;
pub use route::{RenderResult, Route, RouteTable, RouteTableBuilder, Router};
pub use view::{Action, Event, View, ViewFactory};
