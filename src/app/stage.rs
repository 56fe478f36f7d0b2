use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use crate::carousel::{
    compute_slots, plan_transition, slot_index_of, CardMotion, CarouselSettings, Frame,
    LayoutConfig, Spring, CONTENT_ITEMS, SLOT_COUNT,
};

use super::px;

/// Absolutely positioned cards, each springing towards the slot its item
/// currently occupies.
#[component]
pub fn Stage(viewport: Memo<u32>, layout: Memo<LayoutConfig>, shift: Memo<usize>) -> impl IntoView {
    let settings = use_context::<CarouselSettings>().unwrap_or_default();
    let slots = Memo::new(move |_| compute_slots(&layout.get(), viewport.get(), &settings));

    let initial: [CardMotion; SLOT_COUNT] = slots.with_untracked(|slots| {
        let shift = shift.get_untracked();
        std::array::from_fn(|item| CardMotion::at_rest(Frame::from(&slots[slot_index_of(item, shift)])))
    });
    let motions = RwSignal::new(initial);

    Effect::watch(
        move || (shift.get(), slots.get()),
        move |(shift, slots), prev, _| {
            let cfg = layout.get_untracked();
            motions.update(|motions| match prev {
                Some((prev_shift, _)) if prev_shift != shift => {
                    for placement in plan_transition(*prev_shift, *shift, slots, &cfg, &settings) {
                        motions[placement.item].restart(placement.start, placement.target);
                    }
                }
                _ => {
                    // resize only: glide from wherever the cards are now
                    for (item, motion) in motions.iter_mut().enumerate() {
                        motion.retarget(Frame::from(&slots[slot_index_of(item, *shift)]));
                    }
                }
            });
        },
        false,
    );

    // runs independently of autoplay so manual steps animate while paused
    let spring = Spring::default();
    let last_frame = StoredValue::new(None::<f64>);
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let delta = last_frame
            .get_value()
            .map_or(0.0, |last| args.timestamp - last);
        last_frame.set_value(Some(args.timestamp));
        if motions.with_untracked(|m| m.iter().all(CardMotion::is_settled)) {
            return;
        }
        motions.update(|m| {
            for motion in m.iter_mut() {
                motion.step(delta, &spring);
            }
        });
    });

    let cards = CONTENT_ITEMS
        .iter()
        .enumerate()
        .map(|(item, content)| {
            let frame = Memo::new(move |_| motions.with(|m| m[item].frame()));
            let slot = Memo::new(move |_| slots.with(|s| s[slot_index_of(item, shift.get())]));
            view! {
                <div
                    class="absolute rounded-2xl overflow-hidden bg-white border border-black/5"
                    style:left=move || px(format!("{:.2}", frame.get().left))
                    style:top=move || px(format!("{:.2}", frame.get().top))
                    style:width=move || px(format!("{:.2}", frame.get().width))
                    style:height=move || px(format!("{:.2}", frame.get().height))
                    style:opacity=move || format!("{:.3}", frame.get().opacity)
                    style:z-index=move || slot.get().z_index.to_string()
                    style:box-shadow=move || slot.get().shadow.css()
                    style:pointer-events=move || {
                        if slot.get().is_visible() { "auto" } else { "none" }
                    }
                    style:transform="translateZ(0)"
                    data-item=content.id.as_str()
                >
                    <img
                        src=content.image
                        alt=content.label
                        class="w-full h-full object-cover"
                        loading="lazy"
                        decoding="async"
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="relative mx-auto" style:height=move || px(layout.get().track_height())>
            {cards}
        </div>
    }
}
