use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

pub const SLIDE_INTERVAL_MS: u32 = 5_000;

const SLIDES: [&str; 3] = [
    "/assets/slider-1.jpg",
    "/assets/slider-2.jpg",
    "/assets/slider-3.jpg",
];

/// Индекс текущего слайда, по кругу
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slider {
    index: usize,
}

impl Slider {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }
}

/// Стартовая страница `/` (без шапки)
#[component]
pub fn LandingPage() -> impl IntoView {
    let slider = RwSignal::new(Slider::default());
    let navigate = use_navigate();

    let interval = Interval::new(SLIDE_INTERVAL_MS, move || {
        slider.update(|s| s.advance(SLIDES.len()));
    });
    let interval = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        if let Some(interval) = interval.try_update_value(|i| i.take()).flatten() {
            interval.cancel();
        }
    });

    view! {
        <div class="landing">
            <img
                class="landing__slide"
                src=move || SLIDES[slider.get().index() % SLIDES.len()]
                alt="Slider"
            />
            <div class="landing__overlay"></div>

            <div class="landing__content">
                <h1>"Welcome to World Vision Lanka"</h1>
                <h2>"Rideegama Area Programme"</h2>
                <p>
                    "Supporting children, families and communities across the Rideegama area \
                     through sponsorship, protection, nutrition and livelihood programmes."
                </p>
                <button class="landing__continue" on:click=move |_| navigate("/home", Default::default())>
                    "Continue"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_wraps_around() {
        let mut slider = Slider::default();
        slider.advance(3);
        slider.advance(3);
        assert_eq!(slider.index(), 2);
        slider.advance(3);
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_slider_without_slides_stays_put() {
        let mut slider = Slider::default();
        slider.advance(0);
        assert_eq!(slider.index(), 0);
    }
}
