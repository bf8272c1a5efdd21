// webpdrop/src/app/mod.rs
use std::collections::HashMap;
use std::path::PathBuf;

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::core::converter;
use crate::core::store::ResultStore;
use crate::core::{ConversionResult, EncodeQuality};
use crate::processors::{BundleWriter, FileIntake, BUNDLE_FILE_NAME};
use crate::utils::{format_size_kb, INPUT_EXTENSIONS};

type ConversionOutcome = crate::core::Result<ConversionResult>;

const CARD_WIDTH: f32 = 196.0;
const THUMBNAIL_MAX: u32 = 512;

pub struct WebpDropApp {
    store: ResultStore,
    intake: FileIntake,
    bundler: BundleWriter,
    optimize: bool,
    pending: usize,
    tx: Sender<ConversionOutcome>,
    rx: Receiver<ConversionOutcome>,
    thumbnails: HashMap<String, egui::TextureHandle>,
}

impl WebpDropApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, optimize: bool, inputs: Vec<PathBuf>) -> Self {
        let (tx, rx) = unbounded();
        let mut app = Self {
            store: ResultStore::new(),
            intake: FileIntake::new(),
            bundler: BundleWriter::new(),
            optimize,
            pending: 0,
            tx,
            rx,
            thumbnails: HashMap::new(),
        };
        if !inputs.is_empty() {
            app.queue_paths(inputs);
        }
        app
    }

    /// Intake: expand directories, screen each file, dispatch the accepted
    /// ones. Every rejection is silent apart from the debug log.
    fn queue_paths(&mut self, candidates: Vec<PathBuf>) {
        let quality = EncodeQuality::from_optimize(self.optimize);
        for path in self.intake.expand(&candidates) {
            match self.intake.screen(&path, &self.store) {
                Ok(job) => {
                    self.pending += 1;
                    converter::spawn(job, quality, self.tx.clone());
                }
                Err(err) => log::debug!("skipping {}: {}", path.display(), err),
            }
        }
    }

    /// Applies finished conversions on the UI thread, which is the store's
    /// single owner. Completions arrive in whatever order the workers
    /// finish; a duplicate key overwrites the earlier entry. A failed
    /// conversion only balances the in-flight count; nothing is shown.
    fn drain_finished(&mut self, ctx: &egui::Context) {
        while let Ok(outcome) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            if let Ok(result) = outcome {
                self.install_thumbnail(ctx, &result);
                self.store.insert(result);
            }
        }
    }

    fn install_thumbnail(&mut self, ctx: &egui::Context, result: &ConversionResult) {
        let decoded = match image::load_from_memory(&result.data) {
            Ok(decoded) => decoded,
            Err(err) => {
                log::debug!("no thumbnail for {}: {}", result.output_name, err);
                return;
            }
        };
        let thumb = decoded.thumbnail(THUMBNAIL_MAX, THUMBNAIL_MAX).to_rgba8();
        let size = [thumb.width() as usize, thumb.height() as usize];
        let color = egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw());
        let texture =
            ctx.load_texture(result.output_name.clone(), color, egui::TextureOptions::LINEAR);
        self.thumbnails.insert(result.output_name.clone(), texture);
    }

    fn pick_files(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .set_title("Add images")
            .add_filter("Images", &INPUT_EXTENSIONS)
            .pick_files()
        {
            self.queue_paths(paths);
        }
    }

    fn pick_folder(&mut self) {
        if let Some(path) = rfd::FileDialog::new().set_title("Add folder").pick_folder() {
            self.queue_paths(vec![path]);
        }
    }

    fn save_single(&self, name: &str) {
        let Some(entry) = self.store.get(name) else {
            return;
        };
        let Some(target) = rfd::FileDialog::new().set_file_name(name).save_file() else {
            return;
        };
        if let Err(err) = std::fs::write(&target, &entry.data) {
            log::warn!("failed to save {}: {}", target.display(), err);
        }
    }

    fn save_bundle(&self) {
        let bytes = match self.bundler.bundle(&self.store) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return,
            Err(err) => {
                log::warn!("bundle failed: {}", err);
                return;
            }
        };
        let Some(target) = rfd::FileDialog::new()
            .set_file_name(BUNDLE_FILE_NAME)
            .save_file()
        else {
            return;
        };
        if let Err(err) = std::fs::write(&target, bytes) {
            log::warn!("failed to save {}: {}", target.display(), err);
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("webpdrop");
            ui.separator();
            if ui.button("Add images…").clicked() {
                self.pick_files();
            }
            if ui.button("Add folder…").clicked() {
                self.pick_folder();
            }
            ui.checkbox(&mut self.optimize, "Optimize (smaller files)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let bundle_button = egui::Button::new("Download all (.zip)");
                if ui.add_enabled(!self.store.is_empty(), bundle_button).clicked() {
                    self.save_bundle();
                }
                if self.pending > 0 {
                    ui.spinner();
                    ui.label(format!("{} converting…", self.pending));
                }
            });
        });
    }

    fn drop_zone(&mut self, ui: &mut egui::Ui) {
        let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
        let (rect, response) =
            ui.allocate_at_least(egui::vec2(ui.available_width(), 110.0), egui::Sense::click());

        let visuals = ui.visuals();
        let (fill, stroke) = if hovering {
            (
                visuals.selection.bg_fill.linear_multiply(0.2),
                egui::Stroke::new(2.0, visuals.selection.stroke.color),
            )
        } else {
            (
                visuals.extreme_bg_color,
                egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color),
            )
        };
        ui.painter().rect(rect, 8.0, fill, stroke);
        ui.painter().text(
            rect.center() - egui::vec2(0.0, 10.0),
            egui::Align2::CENTER_CENTER,
            "Drop images or folders here",
            egui::FontId::proportional(16.0),
            visuals.text_color(),
        );
        ui.painter().text(
            rect.center() + egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            "JPEG, PNG, GIF, BMP and AVIF, converted to WebP",
            egui::FontId::proportional(12.0),
            visuals.weak_text_color(),
        );

        if response.clicked() {
            self.pick_files();
        }
    }

    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        let mut save_requested: Option<String> = None;
        let mut removed: Option<String> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    for (name, entry) in self.store.iter() {
                        egui::Frame::group(ui.style())
                            .inner_margin(egui::Margin::same(8.0))
                            .show(ui, |ui| {
                                ui.set_width(CARD_WIDTH);
                                ui.vertical(|ui| {
                                    if let Some(texture) = self.thumbnails.get(name) {
                                        ui.add(
                                            egui::Image::new(texture)
                                                .max_size(egui::vec2(CARD_WIDTH, 140.0)),
                                        );
                                    } else {
                                        ui.label(
                                            egui::RichText::new("(no preview)").weak(),
                                        );
                                    }
                                    ui.label(egui::RichText::new(name).strong());
                                    ui.label(format!(
                                        "Original: {}",
                                        format_size_kb(entry.original_size)
                                    ));
                                    ui.label(format!(
                                        "Converted: {}",
                                        format_size_kb(entry.converted_size)
                                    ));
                                    ui.horizontal(|ui| {
                                        if ui.button("Save…").clicked() {
                                            save_requested = Some(name.clone());
                                        }
                                        if ui.button("Remove").clicked() {
                                            removed = Some(name.clone());
                                        }
                                    });
                                });
                            });
                    }
                });
            });

        if let Some(name) = save_requested {
            self.save_single(&name);
        }
        if let Some(name) = removed {
            self.store.remove(&name);
            self.thumbnails.remove(&name);
        }
    }
}

impl eframe::App for WebpDropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_finished(ctx);

        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.queue_paths(dropped);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.toolbar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.drop_zone(ui);
            ui.add_space(12.0);
            if self.store.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(egui::RichText::new("Nothing converted yet").weak());
                });
            } else {
                self.preview_panel(ui);
            }
        });

        // Workers may deliver while no input events arrive.
        if self.pending > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
