//! Drawable geometry for a completed McCabe-Thiele construction.
//!
//! The core reports compositions, reflux ratios, and stage coordinates; this
//! module turns them into plain line segments and label anchors in the unit
//! composition square, leaving styling and text rendering to whichever
//! drawing layer consumes them.

use super::core::{Column, EquilibriumCurve, Point, Results};

/// Offset between a stage's corner and its numeric label anchor.
const LABEL_OFFSET: f64 = 0.045;

/// Configuration for diagram assembly.
#[derive(Debug, Clone, Copy)]
pub struct DiagramConfig {
    /// Number of points sampled along each equilibrium curve.
    pub curve_samples: usize,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self { curve_samples: 100 }
    }
}

/// A straight segment in the composition plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    fn vertical(x: f64, y_top: f64) -> Self {
        Self::new(Point { x, y: 0.0 }, Point { x, y: y_top })
    }
}

/// Anchor point for one stage's numeric label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageLabel {
    /// Where to draw the label.
    pub at: Point,

    /// 1-based stage index.
    pub stage: usize,
}

/// The assembled diagram geometry.
#[derive(Debug, Clone)]
pub struct Diagram {
    /// Sampled ideal equilibrium curve.
    pub ideal_curve: Vec<Point>,

    /// Sampled efficiency-corrected equilibrium curve. Coincides with the
    /// ideal curve at unity efficiency.
    pub corrected_curve: Vec<Point>,

    /// The y = x diagonal.
    pub diagonal: Segment,

    /// Feed line from `(xf, xf)` to the operating-line switch point.
    pub feed_line: Segment,

    /// Rectifying operating line from `(xd, xd)` to the switch point.
    pub rectifying_line: Segment,

    /// Stripping operating line from `(xb, xb)` to the switch point.
    pub stripping_line: Segment,

    /// Vertical guides dropped from the diagonal at the distillate, feed,
    /// and bottoms compositions.
    pub composition_guides: [Segment; 3],

    /// The staircase: a horizontal and a vertical segment per stage, plus
    /// the final drop to the composition axis.
    pub staircase: Vec<Segment>,

    /// One label anchor per stage.
    pub stage_labels: Vec<StageLabel>,
}

/// Assembles the drawable geometry for a completed construction.
#[must_use]
pub fn assemble(column: &Column, results: &Results, config: &DiagramConfig) -> Diagram {
    let curve = EquilibriumCurve::new(results.relative_volatility, column.efficiency.value());

    let samples = config.curve_samples.max(2);
    let mut ideal_curve = Vec::with_capacity(samples);
    let mut corrected_curve = Vec::with_capacity(samples);
    for i in 0..samples {
        let x = i as f64 / (samples - 1) as f64;
        ideal_curve.push(Point {
            x,
            y: curve.vapor_ideal(x),
        });
        corrected_curve.push(Point {
            x,
            y: curve.vapor(x),
        });
    }

    let distillate = column.compositions.distillate();
    let bottoms = column.compositions.bottoms();
    let feed = column.compositions.feed();

    let on_diagonal = |x: f64| Point { x, y: x };

    let mut staircase = Vec::with_capacity(2 * results.stages.len() + 1);
    let mut stage_labels = Vec::with_capacity(results.stages.len());
    for (index, stage) in results.stages.iter().enumerate() {
        let corner = stage.corner();
        staircase.push(Segment::new(stage.from, corner));
        staircase.push(Segment::new(corner, stage.to));
        stage_labels.push(StageLabel {
            at: Point {
                x: corner.x - LABEL_OFFSET,
                y: corner.y + LABEL_OFFSET,
            },
            stage: index + 1,
        });
    }
    if let Some(last) = results.stages.last() {
        staircase.push(Segment::new(last.corner(), Point {
            x: last.to.x,
            y: 0.0,
        }));
    }

    Diagram {
        ideal_curve,
        corrected_curve,
        diagonal: Segment::new(Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 1.0 }),
        feed_line: Segment::new(on_diagonal(feed), results.switch),
        rectifying_line: Segment::new(on_diagonal(distillate), results.switch),
        stripping_line: Segment::new(on_diagonal(bottoms), results.switch),
        composition_guides: [
            Segment::vertical(distillate, distillate),
            Segment::vertical(feed, feed),
            Segment::vertical(bottoms, bottoms),
        ],
        staircase,
        stage_labels,
    }
}
