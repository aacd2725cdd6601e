// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section tree, model, and layout extraction.

use core::fmt;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use scrimshaw_config::{ModalConfig, ModalTheme, Placement};
use scrimshaw_diff::{Diff, Invalidation, ModelCell, ModelView, Rule};
use taffy::prelude::{
    AlignItems, AvailableSpace, Dimension, FlexDirection, JustifyContent, LengthPercentage,
    NodeId, Rect as TaffyRect, Size as TaffySize, Style, TaffyTree,
};

use crate::ComposeError;

/// Displayable content of one section.
///
/// The composer never inspects content beyond asking for its height.
pub trait Content {
    /// Intrinsic height when laid out at `width`.
    fn measure(&self, width: f64) -> f64;
}

/// Vertical anchoring of the container inside the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Centered dialog.
    #[default]
    Center,
    /// Sheet resting on the bottom edge.
    Bottom,
}

impl From<Placement> for Anchor {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Center => Self::Center,
            Placement::Bottom(_) => Self::Bottom,
        }
    }
}

/// Geometry inputs of the composer.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposerModel {
    /// Viewport size.
    pub viewport: Size,
    /// Vertical anchoring.
    pub anchor: Anchor,
    /// Preferred maximum container width; infinite means "fill".
    pub preferred_width: f64,
    /// Insets between viewport and container.
    pub outer_paddings: Insets,
    /// Insets between container and sections.
    pub content_paddings: Insets,
    /// Gap between present sections.
    pub spacing: f64,
    /// Bumped by callers when section content changed its intrinsic size.
    pub content_revision: u64,
}

impl ComposerModel {
    /// A model with default paddings and an unbounded preferred width.
    #[must_use]
    pub fn new(viewport: Size, anchor: Anchor) -> Self {
        Self {
            viewport,
            anchor,
            preferred_width: f64::INFINITY,
            outer_paddings: Insets::uniform(16.0),
            content_paddings: Insets::uniform(16.0),
            spacing: 12.0,
            content_revision: 0,
        }
    }

    /// The model implied by a presentation config.
    #[must_use]
    pub fn from_config(config: &ModalConfig, theme: &ModalTheme, viewport: Size) -> Self {
        Self {
            viewport,
            anchor: config.placement().into(),
            preferred_width: theme.preferred_width(config.size_class()),
            outer_paddings: config.outer_paddings(),
            content_paddings: config.content_paddings(),
            spacing: config.content_spacing(),
            content_revision: 0,
        }
    }
}

const GEOMETRY: Invalidation = Invalidation::SIZE.union(Invalidation::LAYOUT);

impl Diff for ComposerModel {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("viewport", |o, n| o.viewport != n.viewport, GEOMETRY),
        Rule::new("anchor", |o, n| o.anchor != n.anchor, Invalidation::LAYOUT),
        Rule::new(
            "preferred_width",
            |o, n| o.preferred_width != n.preferred_width,
            GEOMETRY,
        ),
        Rule::new(
            "paddings",
            |o, n| o.outer_paddings != n.outer_paddings || o.content_paddings != n.content_paddings,
            GEOMETRY,
        ),
        Rule::new("spacing", |o, n| o.spacing != n.spacing, Invalidation::LAYOUT),
        Rule::new(
            "content",
            |o, n| o.content_revision != n.content_revision,
            GEOMETRY,
        ),
    ];
}

/// Section rectangles in viewport coordinates, at rest (no transition applied).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ComposedLayout {
    /// The container, including content paddings.
    pub container: Rect,
    /// Header section, if present.
    pub header: Option<Rect>,
    /// Visible body region.
    pub body: Rect,
    /// Footer section, if present.
    pub footer: Option<Rect>,
    /// Full intrinsic height of the body content at the body's width.
    pub body_content_height: f64,
}

impl ComposedLayout {
    /// Returns `true` when the body content is taller than its visible region.
    #[must_use]
    pub fn body_scrolls(&self) -> bool {
        self.body_content_height > self.body.height()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Header,
    Body,
    Footer,
}

/// Lays out header, body, and footer inside a soft-width container.
pub struct ContentComposer {
    model: ModelCell<ComposerModel>,
    engine: Engine,
}

struct Engine {
    taffy: TaffyTree<Section>,
    root: NodeId,
    container: NodeId,
    header: Option<(NodeId, Box<dyn Content>)>,
    body: (NodeId, Box<dyn Content>),
    footer: Option<(NodeId, Box<dyn Content>)>,
    layout: ComposedLayout,
    pending: Invalidation,
    passes: u64,
}

impl fmt::Debug for ContentComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentComposer")
            .field("model", self.model.get())
            .field("layout", &self.engine.layout)
            .field("has_header", &self.engine.header.is_some())
            .field("has_footer", &self.engine.footer.is_some())
            .field("passes", &self.engine.passes)
            .finish_non_exhaustive()
    }
}

impl ContentComposer {
    /// Builds the section tree and performs the first layout.
    pub fn new(
        model: ComposerModel,
        header: Option<Box<dyn Content>>,
        body: Box<dyn Content>,
        footer: Option<Box<dyn Content>>,
    ) -> Result<Self, ComposeError> {
        let mut taffy = TaffyTree::new();
        let header = header
            .map(|content| {
                let node = taffy.new_leaf_with_context(fixed_section_style(), Section::Header)?;
                Ok::<_, ComposeError>((node, content))
            })
            .transpose()?;
        let body_node = taffy.new_leaf_with_context(body_style(), Section::Body)?;
        let footer = footer
            .map(|content| {
                let node = taffy.new_leaf_with_context(fixed_section_style(), Section::Footer)?;
                Ok::<_, ComposeError>((node, content))
            })
            .transpose()?;

        let mut children = Vec::with_capacity(3);
        children.extend(header.as_ref().map(|(node, _)| *node));
        children.push(body_node);
        children.extend(footer.as_ref().map(|(node, _)| *node));

        let container = taffy.new_with_children(container_style(&model), &children)?;
        let root = taffy.new_with_children(root_style(&model), &[container])?;

        let mut engine = Engine {
            taffy,
            root,
            container,
            header,
            body: (body_node, body),
            footer,
            layout: ComposedLayout::default(),
            pending: Invalidation::empty(),
            passes: 0,
        };
        let model = ModelCell::mount(model, &mut engine);
        engine.flush(model.get())?;
        Ok(Self { model, engine })
    }

    /// Assigns a new model, performing only the layout work it requires.
    ///
    /// Returns the work that was performed.
    pub fn update(&mut self, model: ComposerModel) -> Result<Invalidation, ComposeError> {
        let invalidation = self.model.apply(model, &mut self.engine);
        self.engine.flush(self.model.get())?;
        Ok(invalidation)
    }

    /// Re-measures sections after their content changed size.
    pub fn invalidate_content(&mut self) -> Result<Invalidation, ComposeError> {
        let mut model = self.model.get().clone();
        model.content_revision = model.content_revision.wrapping_add(1);
        self.update(model)
    }

    /// The current model.
    #[must_use]
    pub fn model(&self) -> &ComposerModel {
        self.model.get()
    }

    /// The most recent layout.
    #[must_use]
    pub fn layout(&self) -> &ComposedLayout {
        &self.engine.layout
    }

    /// Number of layout passes run so far.
    #[must_use]
    pub fn layout_passes(&self) -> u64 {
        self.engine.passes
    }
}

impl ModelView<ComposerModel> for Engine {
    fn restyle(&mut self, _model: &ComposerModel) {
        // Nothing paint-level lives in the section tree.
    }

    fn invalidate_size(&mut self, _model: &ComposerModel) {
        self.pending |= Invalidation::SIZE;
    }

    fn relayout(&mut self, _model: &ComposerModel) {
        self.pending |= Invalidation::LAYOUT;
    }
}

impl Engine {
    fn flush(&mut self, model: &ComposerModel) -> Result<(), ComposeError> {
        let pending = core::mem::take(&mut self.pending);
        if pending.contains(Invalidation::SIZE) {
            for node in self.leaf_nodes() {
                self.taffy.mark_dirty(node)?;
            }
        }
        if pending.contains(Invalidation::LAYOUT) {
            self.run(model)?;
        }
        Ok(())
    }

    fn leaf_nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(3);
        nodes.extend(self.header.as_ref().map(|(node, _)| *node));
        nodes.push(self.body.0);
        nodes.extend(self.footer.as_ref().map(|(node, _)| *node));
        nodes
    }

    fn run(&mut self, model: &ComposerModel) -> Result<(), ComposeError> {
        self.taffy.set_style(self.root, root_style(model))?;
        self.taffy.set_style(self.container, container_style(model))?;

        let Self {
            taffy,
            root,
            container,
            header,
            body,
            footer,
            ..
        } = self;

        let available = TaffySize {
            width: AvailableSpace::Definite(px(model.viewport.width)),
            height: AvailableSpace::Definite(px(model.viewport.height)),
        };
        taffy.compute_layout_with_measure(
            *root,
            available,
            |known, available, _node, section, _style| {
                let Some(section) = section else {
                    return TaffySize::ZERO;
                };
                let content: &dyn Content = match section {
                    Section::Header => match header {
                        Some((_, c)) => &**c,
                        None => return TaffySize::ZERO,
                    },
                    Section::Body => &*body.1,
                    Section::Footer => match footer {
                        Some((_, c)) => &**c,
                        None => return TaffySize::ZERO,
                    },
                };
                let width = known.width.unwrap_or(match available.width {
                    AvailableSpace::Definite(w) => w,
                    AvailableSpace::MinContent | AvailableSpace::MaxContent => 0.0,
                });
                let height = known
                    .height
                    .unwrap_or_else(|| px(content.measure(f64::from(width)).max(0.0)));
                TaffySize { width, height }
            },
        )?;

        let container_layout = taffy.layout(*container)?;
        let origin = Point::new(
            f64::from(container_layout.location.x),
            f64::from(container_layout.location.y),
        );
        let container_rect = Rect::from_origin_size(
            origin,
            (
                f64::from(container_layout.size.width),
                f64::from(container_layout.size.height),
            ),
        );

        let section_rect = |node: NodeId| -> Result<Rect, ComposeError> {
            let l = taffy.layout(node)?;
            Ok(Rect::from_origin_size(
                origin + Vec2::new(f64::from(l.location.x), f64::from(l.location.y)),
                (f64::from(l.size.width), f64::from(l.size.height)),
            ))
        };

        let header_rect = header
            .as_ref()
            .map(|(node, _)| section_rect(*node))
            .transpose()?;
        let body_rect = section_rect(body.0)?;
        let footer_rect = footer
            .as_ref()
            .map(|(node, _)| section_rect(*node))
            .transpose()?;

        self.layout = ComposedLayout {
            container: container_rect,
            header: header_rect,
            body: body_rect,
            footer: footer_rect,
            body_content_height: self.body.1.measure(body_rect.width()).max(0.0),
        };
        self.passes += 1;
        Ok(())
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Taffy lays out in f32; UI coordinates fit comfortably"
)]
fn px(value: f64) -> f32 {
    value as f32
}

fn length(value: f64) -> LengthPercentage {
    LengthPercentage::length(px(value))
}

fn padding(insets: Insets) -> TaffyRect<LengthPercentage> {
    TaffyRect {
        left: length(insets.x0),
        right: length(insets.x1),
        top: length(insets.y0),
        bottom: length(insets.y1),
    }
}

fn root_style(model: &ComposerModel) -> Style {
    Style {
        flex_direction: FlexDirection::Column,
        size: TaffySize {
            width: Dimension::length(px(model.viewport.width)),
            height: Dimension::length(px(model.viewport.height)),
        },
        padding: padding(model.outer_paddings),
        justify_content: Some(match model.anchor {
            Anchor::Center => JustifyContent::Center,
            Anchor::Bottom => JustifyContent::FlexEnd,
        }),
        align_items: Some(AlignItems::Center),
        ..Style::DEFAULT
    }
}

fn container_style(model: &ComposerModel) -> Style {
    let max_width = if model.preferred_width.is_finite() {
        Dimension::length(px(model.preferred_width))
    } else {
        Dimension::auto()
    };
    Style {
        flex_direction: FlexDirection::Column,
        flex_shrink: 1.0,
        size: TaffySize {
            // Fill the padded viewport, but never beyond the preferred width.
            width: Dimension::percent(1.0),
            height: Dimension::auto(),
        },
        min_size: TaffySize {
            width: Dimension::auto(),
            height: Dimension::length(0.0),
        },
        max_size: TaffySize {
            width: max_width,
            height: Dimension::percent(1.0),
        },
        padding: padding(model.content_paddings),
        gap: TaffySize {
            width: length(0.0),
            height: length(model.spacing),
        },
        ..Style::DEFAULT
    }
}

fn fixed_section_style() -> Style {
    Style {
        flex_shrink: 0.0,
        ..Style::DEFAULT
    }
}

fn body_style() -> Style {
    Style {
        flex_shrink: 1.0,
        min_size: TaffySize {
            width: Dimension::auto(),
            height: Dimension::length(0.0),
        },
        ..Style::DEFAULT
    }
}
