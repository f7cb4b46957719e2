//! Product sections: layout choice, carousel slides, and the slide cursor.
//!
//! A section shows one catalog partition either as a carousel of two-product
//! slides or as a plain grid. The layout follows the section title unless the
//! section declares one explicitly: titles containing "recommended"
//! (any case) get the carousel. That ties display copy to layout, so new
//! sections should prefer [`SectionSpec::with_layout`].

use crate::catalog::{CatalogAccessError, CatalogScope, PartitionKey, Product};
use crate::paginate::{SLIDE_WIDTH, page_count, paginate};
use crate::view::{ProductCard, RecommendedCard};
use serde::Serialize;
use std::fmt;
use tracing::debug;

const CAROUSEL_TITLE_MARKER: &str = "recommended";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    Carousel,
    Grid,
}

impl SectionLayout {
    pub fn for_title(title: &str) -> Self {
        if title.to_lowercase().contains(CAROUSEL_TITLE_MARKER) {
            SectionLayout::Carousel
        } else {
            SectionLayout::Grid
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static description of a section on the home page.
pub struct SectionSpec {
    pub title: String,
    pub description: Option<String>,
    pub partition: PartitionKey,
    pub layout: Option<SectionLayout>,
}

impl SectionSpec {
    pub fn new(title: impl Into<String>, partition: PartitionKey) -> Self {
        Self {
            title: title.into(),
            description: None,
            partition,
            layout: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pin the layout instead of deriving it from the title.
    pub fn with_layout(mut self, layout: SectionLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn effective_layout(&self) -> SectionLayout {
        self.layout
            .unwrap_or_else(|| SectionLayout::for_title(&self.title))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Index of the visible slide.
///
/// `next` and `prev` wrap around; the controls built from
/// [`CarouselCursor::can_go_next`] and [`CarouselCursor::can_go_prev`] are
/// disabled at the ends, so the wrap is never reached through them.
/// `go_to` stores any index unchecked; an index past the last slide shows an
/// empty frame until the cursor moves again.
pub struct CarouselCursor {
    current: usize,
    slide_count: usize,
}

impl CarouselCursor {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    // `next` and `prev` reduce first; `go_to` may have stored any index.
    pub fn next(&mut self) -> usize {
        if self.slide_count > 0 {
            let current = self.current % self.slide_count;
            self.current = (current + 1) % self.slide_count;
        }
        debug!(current = self.current, slides = self.slide_count, "carousel next");
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if self.slide_count > 0 {
            let current = self.current % self.slide_count;
            self.current = (current + self.slide_count - 1) % self.slide_count;
        }
        debug!(current = self.current, slides = self.slide_count, "carousel prev");
        self.current
    }

    pub fn go_to(&mut self, index: usize) {
        self.current = index;
        debug!(current = self.current, slides = self.slide_count, "carousel go_to");
    }

    pub fn can_go_prev(&self) -> bool {
        self.slide_count > 0 && self.current != 0
    }

    pub fn can_go_next(&self) -> bool {
        self.slide_count > 0 && self.current != self.slide_count - 1
    }
}

#[derive(Debug)]
/// A section bound to its partition, with cursor state for carousels.
///
/// Mounting a section starts its cursor at slide 0.
pub struct ProductSection<'a> {
    spec: SectionSpec,
    products: &'a [Product],
    cursor: Option<CarouselCursor>,
}

impl<'a> ProductSection<'a> {
    pub fn mount(spec: SectionSpec, scope: &'a CatalogScope) -> Result<Self, CatalogAccessError> {
        let products = scope.products()?.partition(spec.partition);
        let cursor = match spec.effective_layout() {
            SectionLayout::Carousel => {
                Some(CarouselCursor::new(page_count(products.len(), SLIDE_WIDTH)))
            }
            SectionLayout::Grid => None,
        };
        Ok(Self {
            spec,
            products,
            cursor,
        })
    }

    pub fn spec(&self) -> &SectionSpec {
        &self.spec
    }

    pub fn layout(&self) -> SectionLayout {
        self.spec.effective_layout()
    }

    pub fn products(&self) -> &'a [Product] {
        self.products
    }

    /// Carousel slides; empty for grid sections.
    pub fn slides(&self) -> Vec<&'a [Product]> {
        match self.layout() {
            SectionLayout::Carousel => paginate(self.products, SLIDE_WIDTH),
            SectionLayout::Grid => Vec::new(),
        }
    }

    pub fn cursor(&self) -> Option<&CarouselCursor> {
        self.cursor.as_ref()
    }

    pub fn cursor_mut(&mut self) -> Option<&mut CarouselCursor> {
        self.cursor.as_mut()
    }

    pub fn view(&self) -> SectionView {
        let body = match &self.cursor {
            Some(cursor) => SectionBody::Carousel(self.carousel_view(cursor)),
            None => SectionBody::Grid(GridView {
                cards: self.products.iter().map(ProductCard::from_product).collect(),
            }),
        };
        SectionView {
            title: self.spec.title.clone(),
            description: self.spec.description.clone(),
            body,
        }
    }

    fn carousel_view(&self, cursor: &CarouselCursor) -> CarouselView {
        let slides = self.slides();
        let cards: Vec<RecommendedCard> = slides
            .get(cursor.current())
            .map(|group| group.iter().map(RecommendedCard::from_product).collect())
            .unwrap_or_default();
        let indicators: Vec<Indicator> = (0..slides.len())
            .map(|idx| Indicator {
                label: format!("Go to slide {}", idx + 1),
                active: idx == cursor.current(),
            })
            .collect();
        CarouselView {
            current: cursor.current(),
            slide_count: slides.len(),
            cards,
            prev: Control {
                label: "Previous slide".to_string(),
                enabled: cursor.can_go_prev(),
            },
            next: Control {
                label: "Next slide".to_string(),
                enabled: cursor.can_go_next(),
            },
            indicators,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum SectionBody {
    Carousel(CarouselView),
    Grid(GridView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// The visible slide plus navigation state.
pub struct CarouselView {
    pub current: usize,
    pub slide_count: usize,
    pub cards: Vec<RecommendedCard>,
    pub prev: Control,
    pub next: Control,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub label: String,
    pub active: bool,
}

impl SectionView {
    pub fn layout(&self) -> SectionLayout {
        match self.body {
            SectionBody::Carousel(_) => SectionLayout::Carousel,
            SectionBody::Grid(_) => SectionLayout::Grid,
        }
    }

    pub fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        writeln!(writer, "## {}", self.title)?;
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(writer, "{description}")?;
        }
        writeln!(writer)?;
        match &self.body {
            SectionBody::Carousel(carousel) => carousel.render(writer),
            SectionBody::Grid(grid) => {
                for card in &grid.cards {
                    card.render(writer)?;
                }
                Ok(())
            }
        }
    }
}

impl CarouselView {
    fn render(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        for card in &self.cards {
            card.render(writer)?;
        }
        let dots: String = self
            .indicators
            .iter()
            .map(|dot| if dot.active { '●' } else { '○' })
            .collect();
        let position = if self.slide_count == 0 {
            0
        } else {
            self.current.saturating_add(1)
        };
        writeln!(
            writer,
            "{} {} {}   slide {}/{}",
            if self.prev.enabled { "←" } else { "·" },
            dots,
            if self.next.enabled { "→" } else { "·" },
            position,
            self.slide_count
        )
    }
}
