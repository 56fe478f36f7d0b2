use leptos::{either::Either, prelude::*};

use crate::carousel::{Command, ProgressRing};

const BUTTON_CLASS: &str = "h-10 w-10 rounded-full border border-black/10 bg-white shadow-sm grid place-items-center hover:bg-neutral-50 active:scale-95 transition";

/// Prev / play-pause / next row. The play-pause button carries a ring that
/// fills up as the current item's time runs out.
#[component]
pub fn Controls(
    running: Memo<bool>,
    progress: Memo<f64>,
    on_command: Callback<Command>,
) -> impl IntoView {
    let ring = ProgressRing::default();
    let size = ring.size.to_string();
    let center = (ring.size / 2.0).to_string();
    let radius = ring.radius().to_string();
    let stroke = ring.stroke.to_string();

    view! {
        <div class="w-full max-w-[1440px] mx-auto px-6 sm:px-8 lg:px-12 pt-8 flex items-center justify-center gap-3 lg:justify-end">
            <button
                aria-label="Previous"
                class=BUTTON_CLASS
                on:click=move |_| on_command.run(Command::Prev)
            >
                <svg width="18" height="18" viewBox="0 0 24 24" fill="none">
                    <path
                        d="M15 6l-6 6 6 6"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </button>
            <button
                aria-label=move || if running.get() { "Pause" } else { "Play" }
                class=format!("relative {BUTTON_CLASS}")
                on:click=move |_| on_command.run(Command::TogglePlayback)
            >
                <svg
                    width=size.clone()
                    height=size.clone()
                    viewBox=format!("0 0 {size} {size}")
                    class="absolute inset-0"
                >
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        stroke="rgba(0,0,0,0.12)"
                        stroke-width=stroke.clone()
                        fill="none"
                    />
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius
                        stroke="currentColor"
                        stroke-width=stroke
                        fill="none"
                        stroke-dasharray=format!("{:.3}", ring.circumference())
                        stroke-dashoffset=move || format!("{:.3}", ring.dash_offset(progress.get()))
                        transform=format!("rotate(-90 {center} {center})")
                        style="transition: stroke-dashoffset 80ms linear"
                    />
                </svg>
                {move || {
                    if running.get() {
                        Either::Left(
                            view! {
                                <svg width="12" height="12" viewBox="0 0 24 24" fill="none">
                                    <rect x="6" y="5" width="4" height="14" rx="1.2" fill="currentColor" />
                                    <rect x="14" y="5" width="4" height="14" rx="1.2" fill="currentColor" />
                                </svg>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <svg width="12" height="12" viewBox="0 0 24 24" fill="none">
                                    <path d="M8 5l11 7-11 7V5z" fill="currentColor" />
                                </svg>
                            },
                        )
                    }
                }}
            </button>
            <button
                aria-label="Next"
                class=BUTTON_CLASS
                on:click=move |_| on_command.run(Command::Next)
            >
                <svg width="18" height="18" viewBox="0 0 24 24" fill="none">
                    <path
                        d="M9 6l6 6-6 6"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    />
                </svg>
            </button>
        </div>
    }
}
