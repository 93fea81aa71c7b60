//! Visual node tree handed to the renderer.
//!
//! Controllers rebuild this tree every frame from their progress values. The
//! renderer paints it and reports taps back by node id.

use crate::types::{Color, Edges, Offset};

/// What a node represents, so renderers can special-case shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Screen,
    Container,
    TapRegion,
    List,
    Item,
    Label,
    CloseIcon,
    CloseBar,
    Overlay,
}

/// Action reported to the menu when a tap lands on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Stacked after the previous sibling.
    #[default]
    Flow,
    /// Placed at the parent's origin, out of flow.
    Absolute,
    /// Covers the whole parent, out of flow.
    Fill,
}

#[derive(Debug, Clone)]
pub enum Content {
    None,
    Text(String),
    Children(Vec<VisualNode>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub opacity: f32,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Offset,
    pub scale_y: f32,
    /// Clockwise rotation in degrees.
    pub rotate: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Offset::ZERO,
            scale_y: 1.0,
            rotate: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct VisualNode {
    pub id: String,
    pub kind: NodeKind,
    pub content: Content,
    /// `None` sizes to content.
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub margin: Edges,
    pub position: Position,
    pub z_index: i16,
    pub style: NodeStyle,
    pub transform: Transform,
    pub tap: Option<TapAction>,
}

impl VisualNode {
    pub fn new(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: Content::None,
            width: None,
            height: None,
            margin: Edges::default(),
            position: Position::Flow,
            z_index: 0,
            style: NodeStyle::default(),
            transform: Transform::default(),
            tap: None,
        }
    }

    pub fn text(kind: NodeKind, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new(kind, id)
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.style.foreground = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.style.opacity = opacity;
        self
    }

    pub fn translate(mut self, offset: Offset) -> Self {
        self.transform.translate = offset;
        self
    }

    pub fn scale_y(mut self, scale: f32) -> Self {
        self.transform.scale_y = scale;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.transform.rotate = degrees;
        self
    }

    pub fn on_tap(mut self, action: TapAction) -> Self {
        self.tap = Some(action);
        self
    }

    pub fn child(mut self, child: VisualNode) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = VisualNode>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    pub fn child_nodes(&self) -> &[VisualNode] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Find a node by id, depth first.
pub fn find_node<'a>(root: &'a VisualNode, id: &str) -> Option<&'a VisualNode> {
    if root.id == id {
        return Some(root);
    }

    root.child_nodes()
        .iter()
        .find_map(|child| find_node(child, id))
}

/// Every node carrying a tap action, topmost (last painted) first.
pub fn tap_targets(root: &VisualNode) -> Vec<(&str, TapAction)> {
    let mut targets = Vec::new();
    collect_tap_targets(root, &mut targets);
    targets.reverse();
    targets
}

fn collect_tap_targets<'a>(node: &'a VisualNode, out: &mut Vec<(&'a str, TapAction)>) {
    if let Some(action) = node.tap {
        out.push((node.id.as_str(), action));
    }
    for child in node.child_nodes() {
        collect_tap_targets(child, out);
    }
}
