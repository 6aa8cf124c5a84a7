// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use eventhub_core::{Event, EventForm, EventHubClient, FormMode, Submission};

use crate::arg::{CommonArgs, EventArgs, FormArgs};
use crate::cli::Context;
use crate::event_formatter::{EventColumn, EventFormatter, EventRow};
use crate::prompt::prompt_event;
use crate::terminal::TerminalUi;
use crate::util::{OutputFormat, SIGN_IN_REQUIRED, load_failure};

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub fields: FormArgs,

    pub interactive: bool,
    pub output_format: OutputFormat,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create an event; asks for the fields when none are given")
            .args(FormArgs::args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let fields = FormArgs::from(matches);
        Self {
            interactive: fields.is_empty(),
            fields,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating event...");
        if !ctx.session.is_authenticated() {
            return Err(SIGN_IN_REQUIRED.into());
        }

        let mut ui = TerminalUi::new();
        let mut form = EventForm::new(&ctx.client, &ctx.session, FormMode::Create);
        self.fields.apply(form.values_mut());
        if self.interactive {
            prompt_event("New event", form.values_mut())?;
        }

        submit(&mut form, &mut ui, self.output_format).await
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: i64,
    pub fields: FormArgs,

    pub interactive: bool,
    pub output_format: OutputFormat,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit an event you organize; asks for the fields when none are given")
            .arg(EventArgs::id())
            .args(FormArgs::args())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let fields = FormArgs::from(matches);
        Self {
            id: EventArgs::get_id(matches),
            interactive: fields.is_empty(),
            fields,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        if !ctx.session.is_authenticated() {
            return Err(SIGN_IN_REQUIRED.into());
        }

        let mut ui = TerminalUi::new();
        let mut form = EventForm::new(&ctx.client, &ctx.session, FormMode::Edit(self.id));
        form.init(&mut ui).await;
        if let Some(e) = form.take_load_error() {
            return Err(load_failure(self.id, e));
        }
        if ui.take_route().is_some() {
            return Err(format!("Only the organizer can edit event {}", self.id).into());
        }

        self.fields.apply(form.values_mut());
        if self.interactive {
            prompt_event("Edit event", form.values_mut())?;
        }

        submit(&mut form, &mut ui, self.output_format).await
    }
}

async fn submit(
    form: &mut EventForm<'_, EventHubClient>,
    ui: &mut TerminalUi,
    output_format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let submission = form.submit(ui).await;
    match submission {
        Submission::Saved(event) => {
            print_event(&event, output_format);
            Ok(())
        }
        Submission::Invalid => {
            let errors = form
                .values()
                .errors()
                .into_iter()
                .map(|(field, error)| format!("{} {error}", field.label()))
                .collect::<Vec<_>>();
            Err(format!("Invalid event: {}", errors.join("; ")).into())
        }
        Submission::Unauthenticated => Err(SIGN_IN_REQUIRED.into()),
        Submission::Failed(e) => Err(e.into()),
    }
}

fn print_event(event: &Event, output_format: OutputFormat) {
    let rows = [EventRow::new(event)];
    let columns = vec![
        EventColumn::Id,
        EventColumn::Date,
        EventColumn::Category,
        EventColumn::Location,
        EventColumn::Title,
    ];
    let formatter = EventFormatter::new(columns).with_output_format(output_format);
    println!("{}", formatter.format(&rows));
}
