// File: crates/fnchart-core/src/adapter.rs
// Summary: Owns one function chart's lifecycle; maps samples + bounds onto datasets and scales.
// Notes:
// - The handle starts uninitialized; `create_chart` moves it to ready exactly once.
// - Bounds are rounded to two decimals before they reach the scales or the
//   reference segments. Samples are stored as given.

use tracing::{debug, warn};

use crate::chart::Chart;
use crate::config::{ChartOptions, RenderOptions};
use crate::dataset::ChartData;
use crate::error::{ChartError, ChartResult};
use crate::numeric::round2;
use crate::plugin::{ChartAreaBackground, Plugin};
use crate::surface::Surface;
use crate::types::Point;

enum ChartState<S: Surface> {
    Uninitialized,
    Ready(Box<Chart<S>>),
}

pub struct ChartAdapter<S: Surface> {
    state: ChartState<S>,
    options: ChartOptions,
    render: RenderOptions,
}

impl<S: Surface> Default for ChartAdapter<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Surface> ChartAdapter<S> {
    /// Handle with the default function-plot policy and render options.
    pub fn new() -> Self {
        Self::with_options(ChartOptions::default(), RenderOptions::default())
    }

    pub fn with_options(options: ChartOptions, render: RenderOptions) -> Self {
        Self { state: ChartState::Uninitialized, options, render }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ChartState::Ready(_))
    }

    /// Bind a chart to `surface`: reference segments span [-50, 50], no
    /// function data, chart-area frame registered. Draws once.
    pub fn create_chart(&mut self, surface: S) -> ChartResult<()> {
        if self.is_ready() {
            warn!("create_chart called twice; keeping existing chart");
            return Err(ChartError::AlreadyCreated);
        }
        let theme = self.render.theme;
        let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(ChartAreaBackground::from_theme(&theme))];
        let chart = Chart::new(surface, ChartData::new(&theme), self.options.clone(), self.render.clone(), plugins);
        debug!(size = ?chart.surface().size(), "chart created");
        self.state = ChartState::Ready(Box::new(chart));
        Ok(())
    }

    /// Replace the plotted samples, apply rounded axis bounds, redraw.
    pub fn update_chart_data(
        &mut self,
        samples: Vec<Point>,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> ChartResult<()> {
        let chart = self.chart_mut()?;
        chart.data_mut().set_function(samples);
        let (min_x, max_x, min_y, max_y) = (round2(min_x), round2(max_x), round2(min_y), round2(max_y));
        update_bounds(chart, min_x, max_x, min_y, max_y);
        chart.update();
        Ok(())
    }

    pub fn chart(&self) -> ChartResult<&Chart<S>> {
        match &self.state {
            ChartState::Ready(chart) => Ok(chart),
            ChartState::Uninitialized => Err(ChartError::NotInitialized),
        }
    }

    pub fn chart_mut(&mut self) -> ChartResult<&mut Chart<S>> {
        match &mut self.state {
            ChartState::Ready(chart) => Ok(chart),
            ChartState::Uninitialized => Err(ChartError::NotInitialized),
        }
    }

    /// Give the surface back, e.g. to encode what was drawn.
    pub fn into_surface(self) -> ChartResult<S> {
        match self.state {
            ChartState::Ready(chart) => Ok(chart.into_surface()),
            ChartState::Uninitialized => Err(ChartError::NotInitialized),
        }
    }
}

fn update_bounds<S: Surface>(chart: &mut Chart<S>, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
    let scales = &mut chart.options_mut().scales;
    scales.x.set_bounds(min_x, max_x);
    scales.y.set_bounds(min_y, max_y);
    chart.data_mut().set_reference_segments(min_x, max_x, min_y, max_y);
}
