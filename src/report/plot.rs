// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! PNG plots of eruption statistics.

use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::prelude::*;

use super::*;

/// The number of X pixels on the plots.
const X_PIXELS: u32 = 1200;
/// The number of Y pixels on the plots.
const Y_PIXELS: u32 = 900;

const CAPTION_FONT_SIZE: i32 = 36;

/// A [Reporter] that draws PNG histograms and boxplots into a directory. The
/// statistics are logged the same way as [LogReporter] does.
#[derive(Debug)]
pub struct PlotReporter {
    output_dir: PathBuf,
    log: LogReporter,
    written: Vec<PathBuf>,
}

impl PlotReporter {
    /// The directory is created if it doesn't exist yet.
    pub fn new<P: AsRef<Path>>(
        output_dir: P,
        binning: HistogramBinning,
    ) -> Result<PlotReporter, ReportError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        if !output_dir.exists() {
            std::fs::create_dir_all(&output_dir)?;
        }
        Ok(PlotReporter {
            output_dir,
            log: LogReporter::new(binning),
            written: vec![],
        })
    }

    /// The path of the histogram PNG for a region, e.g.
    /// "eruptions_disk.png".
    pub fn histogram_path(&self, region: Region) -> PathBuf {
        self.output_dir.join(format!(
            "eruptions_{}.png",
            region.to_string().to_lowercase()
        ))
    }

    pub fn boxplot_path(&self) -> PathBuf {
        self.output_dir.join("eruptions_boxplot.png")
    }

    /// All of the plots written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Reporter for PlotReporter {
    fn report_region_stats(
        &mut self,
        region: Region,
        summary: &RegionSummary,
    ) -> Result<(), ReportError> {
        self.log.report_region_stats(region, summary)
    }

    fn render_histogram(&mut self, region: Region, eruptions: &[f64]) -> Result<(), ReportError> {
        self.log.render_histogram(region, eruptions)?;

        let HistogramBinning { num_bins, range } = self.log.binning;
        if num_bins == 0 || range.1 <= range.0 {
            return Err(ReportError::NothingToPlot {
                what: histogram_title(region),
            });
        }
        let counts = histogram_counts(eruptions, num_bins, range);
        let max_count = counts.iter().copied().max().unwrap_or(0);
        let width = self.log.binning.bin_width();

        let path = self.histogram_path(region);
        debug!("Drawing {}", path.display());
        let root = BitMapBackend::new(&path, (X_PIXELS, Y_PIXELS)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        let mut cc = ChartBuilder::on(&root)
            .caption(histogram_title(region), ("sans-serif", CAPTION_FONT_SIZE))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d(range.0..range.1, 0..max_count + 1)
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        cc.configure_mesh()
            .disable_x_mesh()
            .x_desc(ERUPTION_AXIS_LABEL)
            .y_desc(COUNTS_AXIS_LABEL)
            .axis_desc_style(("sans-serif", 24))
            .draw()
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        cc.draw_series(counts.iter().enumerate().map(|(i_bin, &count)| {
            let lo = range.0 + i_bin as f64 * width;
            Rectangle::new([(lo, 0), (lo + width, count)], BLUE.mix(0.7).filled())
        }))
        .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        root.present()
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;
        info!("Wrote {}", path.display());
        self.written.push(path.clone());

        Ok(())
    }

    fn render_boxplot(&mut self, populations: &[(Region, Vec<f64>)]) -> Result<(), ReportError> {
        self.log.render_boxplot(populations)?;

        // Quartiles can't be found for empty populations.
        let boxes: Vec<(String, Quartiles)> = boxplot_populations(populations)
            .filter(|(_, eruptions)| !eruptions.is_empty())
            .map(|(region, eruptions)| (boxplot_label(*region), Quartiles::new(eruptions)))
            .collect();
        if boxes.is_empty() {
            return Err(ReportError::NothingToPlot {
                what: BOXPLOT_TITLE.to_string(),
            });
        }
        let labels: Vec<String> = boxes.iter().map(|(label, _)| label.clone()).collect();

        let (y_min, y_max) = boxes.iter().fold((f32::MAX, f32::MIN), |(lo, hi), (_, q)| {
            let v = q.values();
            (lo.min(v[0]), hi.max(v[4]))
        });
        let pad = ((y_max - y_min) * 0.1).max(0.5);

        let path = self.boxplot_path();
        debug!("Drawing {}", path.display());
        let root = BitMapBackend::new(&path, (X_PIXELS, Y_PIXELS)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        let mut cc = ChartBuilder::on(&root)
            .caption(BOXPLOT_TITLE, ("sans-serif", CAPTION_FONT_SIZE))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d(labels[..].into_segmented(), y_min - pad..y_max + pad)
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        cc.configure_mesh()
            .disable_x_mesh()
            .y_desc(ERUPTION_AXIS_LABEL)
            .axis_desc_style(("sans-serif", 24))
            .draw()
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        cc.draw_series(boxes.iter().zip(labels.iter()).map(|((_, quartiles), label)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(label), quartiles)
                .width(60)
                .whisker_width(0.5)
                .style(ShapeStyle::from(&BLUE))
        }))
        .map_err(|e| ReportError::Plotters(Box::new(e)))?;

        root.present()
            .map_err(|e| ReportError::Plotters(Box::new(e)))?;
        info!("Wrote {}", path.display());
        self.written.push(path.clone());

        Ok(())
    }
}
