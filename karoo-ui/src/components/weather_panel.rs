//! Weather Panel Component
//!
//! Current conditions (or the reason there are none) plus the irrigation
//! advisory.

use leptos::*;

use karoo::dashboard::{weather_line, WEATHER_RECOMMENDATION};
use karoo::WeatherStatus;

use super::{InlineLoading, MetricItem};
use crate::state::use_global_state;

#[component]
pub fn WeatherPanel() -> impl IntoView {
    let state = use_global_state();

    let weather = create_memo(move |_| state.dashboard.with(|s| s.weather.clone()));

    view! {
        <section class="flex flex-col gap-4 bg-white p-6 rounded-xl shadow-sm mb-8">
            <MetricItem icon="🌧️">
                <h3 class="font-semibold">"Current Weather"</h3>
                <p class="mt-1">
                    {move || {
                        let status = weather.get();
                        match &status {
                            WeatherStatus::Loading => view! {
                                <InlineLoading />
                                <span class="text-slate-500">{weather_line(&status)}</span>
                            }.into_view(),
                            WeatherStatus::Ready(_) => view! {
                                <span>{weather_line(&status)}</span>
                            }.into_view(),
                            WeatherStatus::Failed(_) => view! {
                                <span class="text-red-500">{weather_line(&status)}</span>
                            }.into_view(),
                        }
                    }}
                </p>
                {move || {
                    weather.get().reading().and_then(|r| {
                        let place = r.location.clone()?;
                        let at = r
                            .observed_label()
                            .map(|t| format!(" · updated {}", t))
                            .unwrap_or_default();
                        Some(view! {
                            <p class="text-xs text-slate-500 mt-1">{place}{at}</p>
                        })
                    })
                }}
            </MetricItem>

            <MetricItem icon="ℹ️" class="bg-orange-50">
                <h3 class="font-semibold">"AI Recommendation"</h3>
                <p class="mt-1">{WEATHER_RECOMMENDATION}</p>
            </MetricItem>
        </section>
    }
}
