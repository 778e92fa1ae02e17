//! skyslot - declarative slot-binding renderer for Bluesky post embeds
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        HOST PLATFORM                         │
//! │  dom/       Fragment trees, marker lookup, HTML output       │
//! │  template/  TemplateRegistry + TemplateHost (clone by id)    │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      APPLICATION LAYER                       │
//! │  embed/     PostEmbed lifecycle (Unmounted → Bound)          │
//! │  acquire/   SourceLink → getProfile → getPosts → BoundRecord │
//! │  binding/   SlotBinder: path → SlotValue → SlotWrite         │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       INFRASTRUCTURE                         │
//! │  util/      Path expressions, constants                      │
//! │  config/    TOML + env configuration                         │
//! │  error/     Error codes with fix suggestions                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! let registry = TemplateRegistry::global();
//! register_default(&registry)?;
//! let templates = TemplateHost::new(registry);
//! let acquirer = DataAcquirer::new(Arc::new(HttpXrpcClient::new(&SkyslotConfig::default())?));
//!
//! let mut embed = PostEmbed::new(HostElement::new("https://bsky.app/profile/alice.test/post/abc123"));
//! let rendered = embed.mount(&templates, &acquirer).await?;
//! println!("{}", rendered.fragment.to_html_string());
//! ```

pub mod acquire;
pub mod binding;
pub mod config;
pub mod dom;
pub mod embed;
pub mod error;
pub mod template;
pub mod util;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

pub use acquire::{BoundRecord, DataAcquirer, HttpXrpcClient, MockXrpcClient, SourceLink, XrpcClient};
pub use binding::{BindReport, SlotBinder, SlotRole};
pub use config::SkyslotConfig;
pub use dom::{Element, Fragment, Node, ToHtml};
pub use embed::{HostElement, PostEmbed, RenderState, Rendered};
pub use error::{FixSuggestion, Result, SkyslotError};
pub use template::{register_default, Template, TemplateHost, TemplateRegistry};
