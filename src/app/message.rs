// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::demo_list;
use crate::ui::gallery;
use iced::{Point, Size};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    DemoList(demo_list::Message),
    Gallery(gallery::Message),
    /// Back button in the header.
    NavigateBack,
    PointerMoved(Point),
    PointerReleased,
    EscapePressed,
    WindowResized(Size),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
