use super::{
    tasks::{run_recurring, spawn_recurring, spawn_task},
    PageContext,
};
use crate::{
    clock::{ClockReading, ClockTicker, SystemTime},
    content::{HERO_LEAD, HERO_LEAD_SPEED, HERO_TITLE, HERO_TITLE_SPEED},
    rotating_text::{RotatingText, Typewriter, START_DELAY},
};
use serde_json::json;
use std::time::Duration;
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let title = use_state(String::new);
    let lead = use_state(String::new);

    {
        let title = title.clone();
        let lead = lead.clone();
        use_effect_with((), move |_| {
            let handle = spawn_task(move |cancel| async move {
                let title_writer = Typewriter::new(HERO_TITLE, HERO_TITLE_SPEED);
                run_recurring(title_writer, Duration::ZERO, &cancel, |text| title.set(text)).await;

                let lead_writer = Typewriter::new(HERO_LEAD, HERO_LEAD_SPEED);
                run_recurring(lead_writer, Duration::ZERO, &cancel, |text| lead.set(text)).await;
            });
            move || drop(handle)
        });
    }

    html! {
        <section id="home" class="hero">
            <h1 aria-label={HERO_TITLE}>{(*title).clone()}</h1>
            <p class="lead" aria-label={HERO_LEAD}>{(*lead).clone()}</p>
            <p class="hero-roles">
                {"I'm a "}
                <RotatingRoles />
            </p>
            <ZoneClock />
        </section>
    }
}

#[function_component(RotatingRoles)]
fn rotating_roles() -> Html {
    let page = use_context::<PageContext>().unwrap_or_default();
    let text = use_state(String::new);

    {
        let text = text.clone();
        let roles = page.config.roles.clone();
        let logger = page.logger;
        use_effect_with((), move |_| {
            let handle = match RotatingText::new(&roles) {
                Some(rotating) => Some(spawn_recurring(rotating, START_DELAY, move |value| text.set(value))),
                None => {
                    logger.debug("rotating_text_skipped", json!({ "reason": "no roles" }));
                    None
                }
            };
            move || drop(handle)
        });
    }

    html! {
        <span id="typing-text" class="typing-text">{(*text).clone()}</span>
    }
}

#[function_component(ZoneClock)]
fn zone_clock() -> Html {
    let page = use_context::<PageContext>().unwrap_or_default();
    let reading = use_state_eq(|| None::<ClockReading>);

    {
        let reading = reading.clone();
        let zone = page.config.clock_zone;
        use_effect_with(zone, move |zone| {
            let ticker = ClockTicker::new(SystemTime, *zone);
            let handle = spawn_recurring(ticker, Duration::ZERO, move |value| reading.set(Some(value)));
            move || drop(handle)
        });
    }

    let (time, date) = match reading.as_ref() {
        Some(reading) => (reading.time.clone(), reading.date.clone()),
        None => (String::new(), String::new()),
    };

    html! {
        <div class="hero-clock" aria-live="off">
            <span class="clock-zone">{page.config.clock_zone.name()}</span>
            <span id="zoneTime" class="clock-time">{time}</span>
            <span id="zoneDate" class="clock-date">{date}</span>
        </div>
    }
}
