// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use cliclack::{input, intro, outro, password, select};
use eventhub_core::{EventCategory, EventFormValues, TITLE_MAX_LEN, parse_date, parse_time};

/// Asks for every field of the event form, offering the current values.
pub fn prompt_event(title: &str, values: &mut EventFormValues) -> Result<(), Box<dyn Error>> {
    intro(title)?;

    values.title = input("Title")
        .default_input(&values.title)
        .validate(|s: &String| {
            if s.trim().is_empty() {
                Err("Title is required".to_string())
            } else if s.chars().count() > TITLE_MAX_LEN {
                Err(format!("Title must be at most {TITLE_MAX_LEN} characters"))
            } else {
                Ok(())
            }
        })
        .interact()?;

    values.description = input("Description")
        .default_input(&values.description)
        .interact()?;

    values.location = input("Location")
        .default_input(&values.location)
        .interact()?;

    let date = values.date.map(|d| d.to_string()).unwrap_or_default();
    let date: String = input("Date")
        .placeholder("YYYY-MM-DD")
        .default_input(&date)
        .validate(|s: &String| parse_date(s).map(|_| ()))
        .interact()?;
    values.date = Some(parse_date(&date)?);

    values.time = input("Time")
        .placeholder("HH:MM")
        .default_input(&values.time)
        .validate(|s: &String| parse_time(s).map(|_| ()))
        .interact()?;

    let mut category = select("Category");
    for c in EventCategory::ALL {
        category = category.item(c, c.label(), "");
    }
    if let Some(current) = values.category {
        category = category.initial_value(current);
    }
    values.category = Some(category.interact()?);

    let max = values
        .max_participants
        .map(|n| n.to_string())
        .unwrap_or_default();
    let max: String = input("Participant limit (empty for none)")
        .default_input(&max)
        .required(false)
        .validate(|s: &String| {
            if s.trim().is_empty() || s.trim().parse::<u32>().is_ok_and(|n| n > 0) {
                Ok(())
            } else {
                Err("Enter a positive number")
            }
        })
        .interact()?;
    values.max_participants = max.trim().parse().ok();

    outro("Sending event")?;
    Ok(())
}

/// Asks for the current and the new password.
pub fn prompt_password() -> Result<(String, String), Box<dyn Error>> {
    intro("Change password")?;
    let old = password("Current password").mask('▪').interact()?;
    let new = password("New password").mask('▪').interact()?;
    let again = password("Repeat new password").mask('▪').interact()?;
    if new != again {
        outro("Passwords do not match")?;
        return Err("Passwords do not match".into());
    }
    outro("Sending new password")?;
    Ok((old, new))
}
