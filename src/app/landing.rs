use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_use::{
    use_event_listener, use_raf_fn, use_window, use_window_size, utils::Pausable,
    UseRafFnCallbackArgs, UseWindowSizeReturn,
};

use crate::carousel::{
    controls_offset, resolve, viewport_width, Carousel, CarouselSettings, Command,
};

use super::{controls::Controls, px, stage::Stage};

#[component]
pub fn Landing() -> impl IntoView {
    let settings = use_context::<CarouselSettings>().unwrap_or_default();
    let carousel = RwSignal::new(Carousel::new(&settings).unwrap_or_else(|err| {
        log::warn!("invalid carousel settings, using defaults: {err}");
        Carousel::default()
    }));

    let UseWindowSizeReturn { width, .. } = use_window_size();
    let viewport = Memo::new(move |_| viewport_width(width.get()));
    let layout = Memo::new(move |_| resolve(viewport.get()));

    let shift = Memo::new(move |_| carousel.with(Carousel::shift));
    let progress = Memo::new(move |_| carousel.with(Carousel::progress));
    let running = Memo::new(move |_| carousel.with(Carousel::is_running));
    let headline = Memo::new(move |_| carousel.with(|c| c.center().headline));

    // autoplay clock, one tick per animation frame
    let last_frame = StoredValue::new(None::<f64>);
    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let delta = last_frame
            .get_value()
            .map_or(0.0, |last| args.timestamp - last);
        last_frame.set_value(Some(args.timestamp));
        carousel.update(|c| {
            c.tick(delta);
        });
    });

    Effect::new(move |_| {
        if running.get() {
            resume();
        } else {
            // time spent paused must not count towards the next rotation
            last_frame.set_value(None);
            pause();
        }
    });

    let on_command = Callback::new(move |command: Command| {
        carousel.update(|c| c.apply(command));
    });

    let _ = use_event_listener(use_window(), ev::keydown, move |evt| {
        if let Some(command) = Command::from_key(&evt.key(), &evt.code()) {
            // space would otherwise scroll the page or re-press a focused button
            evt.prevent_default();
            on_command.run(command);
        }
    });

    view! {
        <Title text="Home" />
        <section class="relative mx-auto pt-16 w-screen isolate">
            <Stage viewport layout shift />
            <div class="relative z-[60] flex justify-center px-4 mt-8">
                <div
                    class="flex flex-col rounded-2xl border border-neutral-200 bg-white shadow-[0_18px_60px_-10px_rgba(0,0,0,0.25)]"
                    style:width=move || px(layout.get().typography.width)
                    style:min-height=move || px(layout.get().typography.height)
                >
                    <h2
                        class="px-6 pt-6 font-semibold tracking-tight whitespace-pre-line"
                        style:font-size=move || px(layout.get().typography.font_size)
                        style:line-height=move || px(layout.get().typography.line_height)
                    >
                        {move || headline.get().text}
                    </h2>
                    <div class="flex justify-end px-6 pb-6 pt-4 mt-auto">
                        <A
                            href=move || headline.get().route.to_string()
                            attr:class="px-4 py-2 rounded-xl bg-neutral-900 text-white text-sm hover:bg-neutral-800 transition"
                        >
                            {move || headline.get().cta}
                        </A>
                    </div>
                </div>
            </div>
            <div style:padding-bottom=move || px(controls_offset(viewport.get()))>
                <Controls running progress on_command />
            </div>
        </section>
    }
}
