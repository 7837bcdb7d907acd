//! Headless tap simulation
//!
//! Drives a bar with a manual clock, stepping frames at a fixed rate until
//! each transition settles, and records the curve position per frame.

use std::time::Duration;

use anyhow::{Context, Result};
use convex_animation::ManualClock;
use convex_bar::{BarConfig, ConvexBar, TabItem};
use serde::Serialize;

/// Upper bound on frames stepped after a single tap
const MAX_FRAMES_PER_TAP: usize = 10_000;

/// One rendered frame
#[derive(Clone, Debug, Serialize)]
pub struct FrameSample {
    /// Simulated time since the first frame, in milliseconds
    pub time_ms: f64,
    /// Tap that preceded this frame, if it is the first frame after one
    pub tap: Option<usize>,
    pub active: usize,
    pub convex: usize,
    pub center_fraction: f32,
    pub animating: bool,
}

/// Simulation settings
#[derive(Clone, Debug)]
pub struct Simulation {
    pub config: BarConfig,
    pub count: usize,
    pub width: f32,
    pub fps: u32,
}

impl Simulation {
    /// Run `taps` in order and return every rendered frame
    pub fn run(&self, taps: &[usize]) -> Result<Vec<FrameSample>> {
        let clock = ManualClock::new();
        let items = (0..self.count)
            .map(|i| TabItem::new(format!("tab{i}")).title(format!("Tab {i}")));
        let mut bar = ConvexBar::builder()
            .config(self.config.clone())
            .items(items)
            .clock(clock.clone())
            .build()
            .context("failed to build bar")?;
        bar.start();

        let step = Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)));
        let mut samples = vec![sample(&mut bar, &clock, None, self.width)];

        for &index in taps {
            bar.on_tab_tapped(index)
                .with_context(|| format!("tap on tab {index} failed"))?;
            samples.push(sample(&mut bar, &clock, Some(index), self.width));

            let mut frames = 0;
            while bar.take_redraw_request() && frames < MAX_FRAMES_PER_TAP {
                clock.advance(step);
                samples.push(sample(&mut bar, &clock, None, self.width));
                frames += 1;
            }
        }

        tracing::info!(
            "simulated {} taps over {} frames",
            taps.len(),
            samples.len()
        );
        Ok(samples)
    }
}

fn sample(
    bar: &mut ConvexBar,
    clock: &ManualClock,
    tap: Option<usize>,
    width: f32,
) -> FrameSample {
    let frame = bar.render(width);
    FrameSample {
        time_ms: clock.elapsed().as_secs_f64() * 1000.0,
        tap,
        active: bar.active_index(),
        convex: frame.convex_index(),
        center_fraction: frame.center_fraction,
        animating: frame.animating,
    }
}
