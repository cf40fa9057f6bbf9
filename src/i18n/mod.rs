// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Fluent `.ftl` files are embedded in the binary and parsed into one bundle
//! per locale at startup. The UI locale is picked once from the `--lang`
//! flag, then `[general] language` in the config file, then the OS locale,
//! and finally `en-US`. Lookups of unknown keys render as `MISSING: <key>`.

pub mod fluent;
