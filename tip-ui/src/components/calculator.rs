use gpui::prelude::FluentBuilder;
use gpui::{
    AnyElement, AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement,
    ParentElement, Render, SharedString, Styled, Subscription, Window, div, px, rgb,
};
use gpui_component::{
    ActiveTheme, Disableable, h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};
use tracing::debug;

use tip_core::{CalculatorSession, PRESET_TIP_PERCENTS};

use crate::components::{make_button, make_tip_button};
use crate::theme::palette;

/// The calculator form and results card.
///
/// Field text lives in the three [`InputState`] entities; everything derived
/// from it lives in the [`CalculatorSession`]. Each input edit is routed
/// through the session's sanitizer and the cleaned text is written back, so
/// the fields can never display characters the session would not accept.
pub struct TipCalculator {
    session: CalculatorSession,
    bill_input: Entity<InputState>,
    custom_tip_input: Entity<InputState>,
    people_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl TipCalculator {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let bill_input = cx.new(|cx| InputState::new(window, cx).placeholder("0"));
        let custom_tip_input = cx.new(|cx| InputState::new(window, cx).placeholder("Custom"));
        let people_input = cx.new(|cx| InputState::new(window, cx).placeholder("0"));

        let subscriptions = vec![
            cx.subscribe_in(&bill_input, window, Self::on_bill_event),
            cx.subscribe_in(&custom_tip_input, window, Self::on_custom_tip_event),
            cx.subscribe_in(&people_input, window, Self::on_people_event),
        ];

        Self {
            session: CalculatorSession::new(),
            bill_input,
            custom_tip_input,
            people_input,
            _subscriptions: subscriptions,
        }
    }

    // ── input plumbing ──────────────────────────────────────────────

    fn on_bill_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change { .. } = event {
            let raw = state.read(cx).value().to_string();
            if raw == self.session.bill() {
                return;
            }
            self.session.set_bill(&raw);
            let cleaned = self.session.bill().to_string();
            if cleaned != raw {
                state.update(cx, |input, cx| input.set_value(cleaned, window, cx));
            }
            debug!(summary = %self.session.summary(), "bill changed");
            cx.notify();
        }
    }

    fn on_custom_tip_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change { .. } = event {
            let raw = state.read(cx).value().to_string();
            // A write-back echo, or the clear that follows a preset click;
            // treating those as edits would wipe the fresh selection.
            if raw == self.session.custom_tip() {
                return;
            }
            self.session.set_custom_tip(&raw);
            let cleaned = self.session.custom_tip().to_string();
            if cleaned != raw {
                state.update(cx, |input, cx| input.set_value(cleaned, window, cx));
            }
            debug!(summary = %self.session.summary(), "custom tip changed");
            cx.notify();
        }
    }

    fn on_people_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let InputEvent::Change { .. } = event {
            let raw = state.read(cx).value().to_string();
            if raw == self.session.people() {
                return;
            }
            self.session.set_people(&raw);
            let cleaned = self.session.people().to_string();
            if cleaned != raw {
                state.update(cx, |input, cx| input.set_value(cleaned, window, cx));
            }
            debug!(
                error = self.session.people_error(),
                summary = %self.session.summary(),
                "people changed"
            );
            cx.notify();
        }
    }

    fn reset(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.session.reset();
        for input in [&self.bill_input, &self.custom_tip_input, &self.people_input] {
            input.update(cx, |state, cx| state.set_value("", window, cx));
        }
        cx.notify();
    }

    // ── sections ────────────────────────────────────────────────────

    fn render_section_label(
        &self,
        text: &'static str,
        cx: &mut Context<Self>,
    ) -> Div {
        div()
            .text_sm()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(cx.theme().colors.secondary_foreground)
            .child(text)
    }

    fn render_bill_section(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        v_flex()
            .gap_2()
            .child(self.render_section_label("Bill", cx))
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        div()
                            .text_color(cx.theme().colors.muted_foreground)
                            .child("$"),
                    )
                    .child(Input::new(&self.bill_input).flex_grow()),
            )
    }

    fn render_tip_button(
        &self,
        percent: u8,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        make_tip_button(
            SharedString::from(format!("tip-{percent}")),
            SharedString::from(format!("{percent}%")),
            self.session.is_preset_selected(percent),
            cx.listener(move |this, _: &ClickEvent, window, cx| {
                this.session.select_preset(percent);
                // The session already dropped any custom value; the field
                // text has to follow it.
                this.custom_tip_input
                    .update(cx, |input, cx| input.set_value("", window, cx));
                cx.notify();
            }),
        )
    }

    fn render_tip_section(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let mut cells: Vec<AnyElement> = PRESET_TIP_PERCENTS
            .iter()
            .map(|&percent| self.render_tip_button(percent, cx).into_any_element())
            .collect();
        cells.push(
            Input::new(&self.custom_tip_input)
                .flex_1()
                .into_any_element(),
        );

        let mut grid = v_flex().gap_3();
        let mut cells = cells.into_iter();
        while let Some(left) = cells.next() {
            let mut row = h_flex().gap_3().child(left);
            if let Some(right) = cells.next() {
                row = row.child(right);
            }
            grid = grid.child(row);
        }

        v_flex()
            .gap_3()
            .child(self.render_section_label("Select Tip %", cx))
            .child(grid)
    }

    fn render_people_section(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let error = self.session.people_error();
        let danger = cx.theme().colors.danger;

        v_flex()
            .gap_2()
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(self.render_section_label("Number of People", cx))
                    .when(error, |row| {
                        row.child(div().text_sm().text_color(danger).child("Can't be zero"))
                    }),
            )
            .child(
                div()
                    .rounded_md()
                    .when(error, |field| field.border_2().border_color(danger))
                    .child(Input::new(&self.people_input)),
            )
    }

    fn render_readout(
        label: &'static str,
        amount: &str,
    ) -> Div {
        h_flex()
            .items_center()
            .justify_between()
            .child(
                v_flex()
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(palette::WHITE))
                            .child(label),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(rgb(palette::TEXT_FAINT))
                            .child("/ person"),
                    ),
            )
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(rgb(palette::ACCENT))
                    .child(SharedString::from(format!("${amount}"))),
            )
    }

    fn render_results(
        &self,
        cx: &mut Context<Self>,
    ) -> Div {
        let summary = self.session.summary();
        let pristine = self.session.is_pristine();

        v_flex()
            .gap_6()
            .p_6()
            .rounded_xl()
            .bg(rgb(palette::CARD))
            .child(Self::render_readout("Tip Amount", &summary.tip_per_person))
            .child(Self::render_readout("Total", &summary.total_per_person))
            .child(
                make_button(
                    "reset",
                    "RESET",
                    cx.listener(|this, _: &ClickEvent, window, cx| {
                        debug!("reset clicked");
                        this.reset(window, cx);
                    }),
                )
                .w_full()
                .disabled(pristine),
            )
    }
}

impl Render for TipCalculator {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .w(px(440.))
            .gap_8()
            .p_8()
            .rounded_xl()
            .bg(rgb(palette::WHITE))
            .child(self.render_bill_section(cx))
            .child(self.render_tip_section(cx))
            .child(self.render_people_section(cx))
            .child(self.render_results(cx))
    }
}
