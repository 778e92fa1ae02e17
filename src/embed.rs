//! PostEmbed - one mounted `<bluesky-post>` host element
//!
//! Lifecycle: `Unmounted → Acquiring → Bound`. There is no refresh; a new
//! render needs a new instance. A failed acquisition leaves the instance in
//! `Acquiring` and returns the error with nothing rendered.

use std::fmt;

use tracing::{info, instrument};

use crate::acquire::{DataAcquirer, SourceLink};
use crate::binding::{BindReport, SlotBinder};
use crate::dom::Fragment;
use crate::error::{Result, SkyslotError};
use crate::template::{TemplateHost, DEFAULT_TAG};

/// The host element as authored in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostElement {
    /// Tag the element was registered under
    pub tag_name: String,
    /// `template` attribute, selecting a non-default template id
    pub template: Option<String>,
    /// `href` of the embedded anchor
    pub link: Option<String>,
}

impl HostElement {
    /// Default tag with the given link
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            tag_name: DEFAULT_TAG.to_string(),
            template: None,
            link: Some(link.into()),
        }
    }

    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn with_template(mut self, template: Option<impl Into<String>>) -> Self {
        self.template = template.map(Into::into);
        self
    }
}

/// Render lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Unmounted,
    Acquiring,
    Bound,
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderState::Unmounted => write!(f, "unmounted"),
            RenderState::Acquiring => write!(f, "acquiring"),
            RenderState::Bound => write!(f, "bound"),
        }
    }
}

/// Result of a successful mount
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub fragment: Fragment,
    pub report: BindReport,
}

/// A host element going through one render
#[derive(Debug)]
pub struct PostEmbed {
    host: HostElement,
    state: RenderState,
    binder: SlotBinder,
}

impl PostEmbed {
    pub fn new(host: HostElement) -> Self {
        Self {
            host,
            state: RenderState::Unmounted,
            binder: SlotBinder::default(),
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn host(&self) -> &HostElement {
        &self.host
    }

    /// Instantiate the template, acquire the record, bind it
    ///
    /// The template lookup happens first, so a missing template fails before
    /// any request is made.
    #[instrument(skip_all, fields(tag = %self.host.tag_name))]
    pub async fn mount(
        &mut self,
        templates: &TemplateHost,
        acquirer: &DataAcquirer,
    ) -> Result<Rendered> {
        if self.state != RenderState::Unmounted {
            return Err(SkyslotError::AlreadyMounted {
                tag: self.host.tag_name.clone(),
            });
        }

        let mut fragment =
            templates.instantiate(self.host.template.as_deref(), &self.host.tag_name)?;

        self.state = RenderState::Acquiring;
        let href = self.host.link.as_deref().ok_or_else(|| SkyslotError::MissingLink {
            tag: self.host.tag_name.clone(),
        })?;
        let link = SourceLink::parse(href)?;
        let record = acquirer.acquire(&link).await?;

        let report = self.binder.bind(&mut fragment, &record);
        self.state = RenderState::Bound;
        info!(slots = report.slots, misses = report.misses, "post bound");

        Ok(Rendered { fragment, report })
    }
}
