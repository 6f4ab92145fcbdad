pub use crate::error::Error;
pub use crate::result::Result;
pub use std::sync::{Arc, Mutex, MutexGuard};

pub use wasm_bindgen::prelude::*;
pub use wasm_bindgen::JsCast;
pub use workflow_core::time::{Duration, Instant};
pub use workflow_dom::utils::*;
pub use workflow_log::{log_error, log_info, log_trace};
pub use workflow_wasm::callback::{callback, AsCallback, Callback, CallbackMap};
