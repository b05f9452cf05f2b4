//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::game_state::{AppSettings, GameMode, GameState};
use super::theme::*;
use crate::{Pos, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl GomokuApp {
    /// Create the app from command-line settings
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self::with_settings(settings)
    }

    fn with_settings(settings: AppSettings) -> Self {
        Self {
            state: GameState::new(settings),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state.set_mode(GameMode::PvE {
                            human_color: Stone::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state.set_mode(GameMode::PvE {
                            human_color: Stone::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.set_mode(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!("PvE - You: {human_color}"),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.session.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, Some(winner));
                } else if self.state.draw {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, None);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Clickable label in a rounded frame
    fn action_button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is and what they are waiting for
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.session.to_move();
            let (stone_char, accent, glyph) = if turn == Stone::Black {
                ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY)
            } else {
                ("○", egui::Color32::from_rgb(220, 220, 225), BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(turn.to_string().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let (status, color) = if self.state.is_finished() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI thinking...", STATUS_WAITING)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "Restart") {
                    self.state.reset();
                }

                ui.add_space(4.0);

                if self.state.mode == GameMode::PvP && Self::action_button(ui, "Hint") {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{:?}", result.search_type))
                    .size(11.0)
                    .strong()
                    .color(STATUS_READY),
            );
            ui.label(
                RichText::new(format!("Score: {:.1}", result.score))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!(
                    "{} tied of {} cells, {}ms",
                    result.ties, result.cells_scored, result.time_ms
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("-> {}", coordinate_label(result.best_move)))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    /// Winner announcement, or a draw when `winner` is `None`
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Option<Stone>) {
        let fill = if winner.is_some() { WIN_CARD_BG } else { DRAW_CARD_BG };

        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);

                    match winner {
                        Some(stone) => {
                            ui.label(
                                RichText::new(format!("{} wins!", stone.to_string().to_uppercase()))
                                    .size(18.0)
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.label(RichText::new("by five in a row").size(11.0).color(WIN_HIGHLIGHT));
                        }
                        None => {
                            ui.label(RichText::new("Draw").size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("the board is full").size(11.0).color(TEXT_SECONDARY));
                        }
                    }

                    ui.add_space(12.0);
                    if Self::action_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let overlay = Overlay {
                    turn: self.state.session.to_move(),
                    last_move: self.state.session.last_move(),
                    suggested_move: self.state.suggested_move,
                    winning_cells: self.state.session.winning_cells(),
                    interactive: !self.state.is_finished() && self.state.is_human_turn(),
                };

                let clicked = self.board_view.show(ui, self.state.session.board(), &overlay);

                if let Some(pos) = clicked {
                    self.state.handle_click(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint && self.state.mode == GameMode::PvP {
            self.state.request_suggestion();
        }
        if restart {
            self.state.reset();
        }
    }
}

/// Board coordinate as shown on the labels, e.g. `H8` for the center
fn coordinate_label(pos: Pos) -> String {
    let col = (b'A' + pos.col) as char;
    let row = crate::BOARD_SIZE - usize::from(pos.row);
    format!("{col}{row}")
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.state.tick(now);
        self.state.schedule_ai(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(remaining) = self.state.ai_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_label() {
        assert_eq!(coordinate_label(Pos::center()), "H8");
        assert_eq!(coordinate_label(Pos::new(0, 0)), "A15");
        assert_eq!(coordinate_label(Pos::new(14, 14)), "O1");
    }
}
