use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::animation::value::{Property, PropValue, css_declarations};
use crate::foundation::core::{NodeId, Rect, Size};
use crate::foundation::error::{HeroError, HeroResult};

/// Node content below its children.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// No text content.
    #[default]
    Empty,
    /// Plain text, escaped on render.
    Text(String),
    /// Trusted inline markup, rendered as-is.
    Markup(String),
}

/// Playback state of a `<video>` node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MediaState {
    /// Source path.
    pub src: String,
    /// `loop` attribute.
    pub looped: bool,
    /// `muted` attribute.
    pub muted: bool,
    /// `autoplay` attribute.
    pub autoplay: bool,
    /// Whether playback was started.
    pub playing: bool,
}

impl MediaState {
    /// Looping muted video, the only kind the landing page uses.
    pub fn looping(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            looped: true,
            muted: true,
            autoplay: false,
            playing: false,
        }
    }

    /// Enable autoplay. Autoplaying media counts as playing from mount.
    pub fn autoplay(mut self) -> Self {
        self.autoplay = true;
        self.playing = true;
        self
    }
}

/// A view node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Element tag.
    pub tag: &'static str,
    /// Stable DOM identity, kept for external styling and lookups.
    pub dom_id: Option<String>,
    /// Class list.
    pub class: String,
    /// Extra attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Text or markup content, rendered after children.
    pub content: Content,
    /// Media state for video nodes.
    pub media: Option<MediaState>,
    /// Style the node's classes give it, used as the baseline for animation.
    pub intrinsic: BTreeMap<Property, PropValue>,
    /// Layout box in document coordinates, where known.
    pub bounds: Option<Rect>,
    inline: BTreeMap<Property, PropValue>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    /// New element with the given tag.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            dom_id: None,
            class: String::new(),
            attrs: Vec::new(),
            content: Content::Empty,
            media: None,
            intrinsic: BTreeMap::new(),
            bounds: None,
            inline: BTreeMap::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Set the DOM id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    /// Set the class list.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Set plain text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Set trusted markup content.
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Markup(markup.into());
        self
    }

    /// Attach media state.
    pub fn media(mut self, media: MediaState) -> Self {
        self.media = Some(media);
        self
    }

    /// Declare a class-provided style value.
    pub fn intrinsic(mut self, prop: Property, value: impl Into<PropValue>) -> Self {
        self.intrinsic.insert(prop, value.into());
        self
    }

    /// Set the layout box.
    pub fn bounds(mut self, rect: Rect) -> Self {
        self.bounds = Some(rect);
        self
    }

    /// Child handles in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Inline (animated) style values.
    pub fn inline_style(&self) -> &BTreeMap<Property, PropValue> {
        &self.inline
    }
}

/// Arena of view nodes with a single root.
///
/// Handles stay valid for the scene's lifetime; detached nodes keep their handle but are no
/// longer rendered.
#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    viewport: Size,
}

impl Scene {
    /// Empty scene for a viewport.
    pub fn new(viewport: Size) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            viewport,
        }
    }

    /// Viewport used to resolve percentages and scroll geometry.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Root node, once one was appended.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Append `node` under `parent`, or as the root when `parent` is `None`.
    pub fn append(&mut self, parent: Option<NodeId>, mut node: Node) -> HeroResult<NodeId> {
        let id = NodeId(
            u32::try_from(self.nodes.len())
                .map_err(|_| HeroError::evaluation("scene node limit reached"))?,
        );
        match parent {
            Some(p) => {
                self.get(p)?;
                node.parent = Some(p);
                self.nodes.push(node);
                self.nodes[p.0 as usize].children.push(id);
            }
            None => {
                if self.root.is_some() {
                    return Err(HeroError::evaluation("scene already has a root"));
                }
                self.nodes.push(node);
                self.root = Some(id);
            }
        }
        Ok(id)
    }

    /// Borrow a node.
    pub fn get(&self, id: NodeId) -> HeroResult<&Node> {
        self.nodes
            .get(id.0 as usize)
            .ok_or_else(|| HeroError::evaluation(format!("unknown node {}", id.0)))
    }

    /// Mutably borrow a node.
    pub fn get_mut(&mut self, id: NodeId) -> HeroResult<&mut Node> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or_else(|| HeroError::evaluation(format!("unknown node {}", id.0)))
    }

    /// Find a node by DOM id. Only meant for boundaries that receive ids from outside.
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.dom_id.as_deref() == Some(dom_id))
            .map(|i| NodeId(i as u32))
    }

    /// Inline value of `prop`, if set.
    pub fn inline(&self, id: NodeId, prop: Property) -> HeroResult<Option<&PropValue>> {
        Ok(self.get(id)?.inline.get(&prop))
    }

    /// Effective value of `prop`: inline, else intrinsic, else the property's initial value.
    pub fn computed(&self, id: NodeId, prop: Property) -> HeroResult<Option<PropValue>> {
        let node = self.get(id)?;
        Ok(node
            .inline
            .get(&prop)
            .or_else(|| node.intrinsic.get(&prop))
            .cloned()
            .or_else(|| prop.initial()))
    }

    /// Write an inline value.
    pub fn set_inline(&mut self, id: NodeId, prop: Property, value: PropValue) -> HeroResult<()> {
        self.get_mut(id)?.inline.insert(prop, value);
        Ok(())
    }

    /// Restore an inline slot to `value`, removing it for `None`.
    pub fn restore_inline(
        &mut self,
        id: NodeId,
        prop: Property,
        value: Option<PropValue>,
    ) -> HeroResult<()> {
        let node = self.get_mut(id)?;
        match value {
            Some(v) => node.inline.insert(prop, v),
            None => node.inline.remove(&prop),
        };
        Ok(())
    }

    /// Replace content.
    pub fn set_content(&mut self, id: NodeId, content: Content) -> HeroResult<()> {
        self.get_mut(id)?.content = content;
        Ok(())
    }

    /// Media state of a video node.
    pub fn media_mut(&mut self, id: NodeId) -> HeroResult<&mut MediaState> {
        self.get_mut(id)?
            .media
            .as_mut()
            .ok_or_else(|| HeroError::evaluation(format!("node {} has no media", id.0)))
    }

    /// Unmount `id` from its parent. Detaching twice is a no-op.
    pub fn detach(&mut self, id: NodeId) -> HeroResult<()> {
        let Some(parent) = self.get(id)?.parent else {
            return Ok(());
        };
        self.nodes[parent.0 as usize].children.retain(|c| *c != id);
        self.nodes[id.0 as usize].parent = None;
        Ok(())
    }

    /// `true` when `id` is reachable from the root.
    pub fn is_mounted(&self, id: NodeId) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if Some(c) == self.root {
                return true;
            }
            cur = self.nodes.get(c.0 as usize).and_then(|n| n.parent);
        }
        false
    }

    /// Render the mounted tree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.write_html(root, &mut out);
        }
        out
    }

    /// Render the subtree at `id` as HTML.
    pub fn render(&self, id: NodeId) -> HeroResult<String> {
        self.get(id)?;
        let mut out = String::new();
        self.write_html(id, &mut out);
        Ok(out)
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let node = &self.nodes[id.0 as usize];
        out.push('<');
        out.push_str(node.tag);
        if let Some(dom_id) = &node.dom_id {
            push_attr(out, "id", dom_id);
        }
        if !node.class.is_empty() {
            push_attr(out, "class", &node.class);
        }
        for (name, value) in &node.attrs {
            push_attr(out, name, value);
        }
        if let Some(media) = &node.media {
            push_attr(out, "src", &media.src);
            for (on, name) in [
                (media.looped, "loop"),
                (media.muted, "muted"),
                (media.autoplay, "autoplay"),
            ] {
                if on {
                    out.push(' ');
                    out.push_str(name);
                }
            }
            if media.playing {
                push_attr(out, "data-playing", "true");
            }
        }
        let style = css_declarations(&node.inline);
        if !style.is_empty() {
            push_attr(out, "style", &style);
        }
        out.push('>');

        if is_void(node.tag) {
            return;
        }

        for child in &node.children {
            self.write_html(*child, out);
        }
        match node.inline.get(&Property::InnerHtml) {
            Some(PropValue::Markup(m)) => out.push_str(m),
            _ => match &node.content {
                Content::Empty => {}
                Content::Text(t) => escape_into(out, t),
                Content::Markup(m) => out.push_str(m),
            },
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "source" | "input")
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(out, value);
    out.push('"');
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/scene.rs"]
mod tests;
