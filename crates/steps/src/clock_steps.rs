//! Sentence bindings for the controllable clock

use std::sync::Arc;

use log::debug;

use kairos_clock::ControllableClock;
use kairos_core::{parse_duration, parse_timestamp};

use crate::error::StepResult;
use crate::registry::StepRegistry;

/// Binds one shared [`ControllableClock`] to scenario sentences
///
/// `register` installs every supported phrasing plus an after-scenario hook
/// that returns the clock to live mode, so a frozen or scripted time never
/// leaks from one scenario into the next.
pub struct ClockSteps {
    clock: Arc<ControllableClock>,
}

impl ClockSteps {
    pub fn new(clock: Arc<ControllableClock>) -> Self {
        Self { clock }
    }

    /// The clock driven by these bindings
    pub fn clock(&self) -> Arc<ControllableClock> {
        self.clock.clone()
    }

    /// Install the clock sentences and the scenario cleanup hook
    ///
    /// The generic duration phrasing is registered before the calendar ones;
    /// their unit words keep them from shadowing each other, and the combined
    /// calendar phrasings only fire when every unit word is present.
    pub fn register(&self, registry: &mut StepRegistry) {
        let clock = self.clock.clone();
        registry.after_scenario(move || {
            debug!("Scenario ended, returning the clock to live mode");
            clock.unfreeze();
        });

        let clock = self.clock.clone();
        registry.step(r#"(?:the )?clock is at "([^"]*)""#, move |args| {
            set_clock(&clock, args[0])
        });
        let clock = self.clock.clone();
        registry.step(r#"(?:the )?clock is set to "([^"]*)""#, move |args| {
            set_clock(&clock, args[0])
        });
        let clock = self.clock.clone();
        registry.step(r#"sets? (?:the )?clock to "([^"]*)""#, move |args| {
            set_clock(&clock, args[0])
        });
        let clock = self.clock.clone();
        registry.step(r#"now is "([^"]*)""#, move |args| set_clock(&clock, args[0]));

        let clock = self.clock.clone();
        registry.step(r"adds? ([^\s]*) to (?:the )?clock", move |args| {
            let offset = parse_duration(args[0])?;
            clock.add(offset)?;
            Ok(())
        });
        let clock = self.clock.clone();
        registry.step(r"adds? ([0-9]+) days? to (?:the )?clock", move |args| {
            add_date(&clock, "0", "0", args[0])
        });
        let clock = self.clock.clone();
        registry.step(r"adds? ([0-9]+) months? to (?:the )?clock", move |args| {
            add_date(&clock, "0", args[0], "0")
        });
        let clock = self.clock.clone();
        registry.step(r"adds? ([0-9]+) years? to (?:the )?clock", move |args| {
            add_date(&clock, args[0], "0", "0")
        });
        let clock = self.clock.clone();
        registry.step(
            r"adds? ([0-9]+) months?,? ([0-9]+) days? to (?:the )?clock",
            move |args| add_date(&clock, "0", args[0], args[1]),
        );
        let clock = self.clock.clone();
        registry.step(
            r"adds? ([0-9]+) years?,? ([0-9]+) days? to (?:the )?clock",
            move |args| add_date(&clock, args[0], "0", args[1]),
        );
        let clock = self.clock.clone();
        registry.step(
            r"adds? ([0-9]+) years?,? ([0-9]+) months? to (?:the )?clock",
            move |args| add_date(&clock, args[0], args[1], "0"),
        );
        let clock = self.clock.clone();
        registry.step(
            r"adds? ([0-9]+) years?,? ([0-9]+) months?,? ([0-9]+) days? to (?:the )?clock",
            move |args| add_date(&clock, args[0], args[1], args[2]),
        );

        let clock = self.clock.clone();
        registry.step(r"\s*freeze (?:the )?clock", move |_| {
            clock.freeze();
            Ok(())
        });
        let clock = self.clock.clone();
        registry.step(
            r"(?:(?:release)|(?:unset)|(?:reset)) (?:the )?clock$",
            move |_| {
                clock.unfreeze();
                Ok(())
            },
        );
    }
}

fn set_clock(clock: &ControllableClock, text: &str) -> StepResult<()> {
    clock.set(parse_timestamp(text)?);

    Ok(())
}

fn add_date(clock: &ControllableClock, years: &str, months: &str, days: &str) -> StepResult<()> {
    clock.add_date(years.parse()?, months.parse()?, days.parse()?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::thread;

    use chrono::{TimeZone, Utc};
    use kairos_clock::Clock;
    use kairos_core::Timestamp;

    use super::*;
    use crate::error::StepError;

    fn wired() -> (StepRegistry, Arc<ControllableClock>) {
        let steps = ClockSteps::new(Arc::new(ControllableClock::new()));
        let mut registry = StepRegistry::new();
        steps.register(&mut registry);

        (registry, steps.clock())
    }

    fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_every_set_phrasing_scripts_the_clock() {
        let sentences = [
            r#"the clock is at "2023-01-02T03:04:05Z""#,
            r#"clock is set to "2023-01-02T03:04:05Z""#,
            r#"the user sets the clock to "2023-01-02T03:04:05Z""#,
            r#"now is "2023-01-02T03:04:05Z""#,
        ];

        for sentence in sentences {
            let (registry, clock) = wired();

            registry.dispatch(sentence).unwrap();

            assert_eq!(clock.now(), ts(2023, 1, 2, 3, 4, 5), "sentence: {sentence}");
        }
    }

    #[test]
    fn test_duration_sentences_shift_scripted_time() {
        let (registry, clock) = wired();
        registry.dispatch(r#"now is "2023-01-02T03:04:05Z""#).unwrap();

        registry.dispatch("add 2h to the clock").unwrap();
        assert_eq!(clock.now(), ts(2023, 1, 2, 5, 4, 5));

        registry.dispatch("the user adds -30m to the clock").unwrap();
        assert_eq!(clock.now(), ts(2023, 1, 2, 4, 34, 5));
    }

    #[test]
    fn test_calendar_sentences_cover_every_field_combination() {
        let cases = [
            ("add 3 days to the clock", ts(2020, 1, 13, 12, 0, 0)),
            ("add 2 months to the clock", ts(2020, 3, 10, 12, 0, 0)),
            ("add 1 year to the clock", ts(2021, 1, 10, 12, 0, 0)),
            ("add 2 months, 3 days to the clock", ts(2020, 3, 13, 12, 0, 0)),
            ("add 1 year, 3 days to the clock", ts(2021, 1, 13, 12, 0, 0)),
            ("add 1 year, 2 months to the clock", ts(2021, 3, 10, 12, 0, 0)),
            (
                "adds 1 year, 2 months, 3 days to the clock",
                ts(2021, 3, 13, 12, 0, 0),
            ),
        ];

        for (sentence, expected) in cases {
            let (registry, clock) = wired();
            registry
                .dispatch(r#"the clock is at "2020-01-10T12:00:00Z""#)
                .unwrap();

            registry.dispatch(sentence).unwrap();

            assert_eq!(clock.now(), expected, "sentence: {sentence}");
        }
    }

    #[test]
    fn test_comma_is_optional_in_calendar_sentences() {
        let (registry, clock) = wired();
        registry
            .dispatch(r#"the clock is at "2020-01-10T12:00:00Z""#)
            .unwrap();

        registry
            .dispatch("add 1 year 2 months 3 days to the clock")
            .unwrap();

        assert_eq!(clock.now(), ts(2021, 3, 13, 12, 0, 0));
    }

    #[test]
    fn test_freeze_sentence_pins_wall_clock_time() {
        let (registry, clock) = wired();

        let before = Utc::now();
        registry.dispatch("I freeze the clock").unwrap();
        let frozen = clock.now();
        assert!(frozen >= before && frozen <= Utc::now());

        thread::sleep(std::time::Duration::from_millis(20));
        assert_eq!(clock.now(), frozen);
    }

    #[test]
    fn test_release_verbs_return_the_clock_to_live_mode() {
        let sentences = ["release the clock", "unset the clock", "they reset the clock"];

        for sentence in sentences {
            let (registry, clock) = wired();
            registry.dispatch(r#"now is "2030-01-01T00:00:00Z""#).unwrap();

            registry.dispatch(sentence).unwrap();

            let before = Utc::now();
            let now = clock.now();
            assert!(now >= before && now <= Utc::now(), "sentence: {sentence}");
        }
    }

    #[test]
    fn test_scenario_cleanup_hook_releases_the_clock() {
        let (registry, clock) = wired();
        registry.dispatch("I freeze the clock").unwrap();

        registry.end_scenario();

        let before = Utc::now();
        let now = clock.now();
        assert!(now >= before && now <= Utc::now());
    }

    #[test]
    fn test_add_sentences_need_a_scripted_clock() {
        let (registry, _clock) = wired();

        let err = registry.dispatch("add 2h to the clock").unwrap_err();
        assert!(matches!(err, StepError::Clock(_)));
        assert_eq!(err.to_string(), "Clock is not set");

        let err = registry.dispatch("add 3 days to the clock").unwrap_err();
        assert!(matches!(err, StepError::Clock(_)));
    }

    #[test]
    fn test_malformed_arguments_surface_parser_errors() {
        let (registry, _clock) = wired();

        let err = registry.dispatch(r#"now is "half past nine""#).unwrap_err();
        assert!(matches!(err, StepError::Parse(_)));

        registry.dispatch(r#"now is "2023-01-02T03:04:05Z""#).unwrap();
        let err = registry.dispatch("add eventually to the clock").unwrap_err();
        assert!(matches!(err, StepError::Parse(_)));
    }

    #[test]
    fn test_oversized_numbers_are_reported_not_panicked() {
        let (registry, _clock) = wired();
        registry.dispatch(r#"now is "2023-01-02T03:04:05Z""#).unwrap();

        let err = registry
            .dispatch("add 99999999999 years to the clock")
            .unwrap_err();

        assert!(matches!(err, StepError::Capture(_)));
    }
}
