//! Terminal renderer for the screen graph.
//!
//! A pure function from (screen, language, one-shot props) to printed
//! lines: each screen type gets its own layout, actions are numbered so
//! the REPL can map a typed number back to a navigation target.

use colored::Colorize;
use syd_core::{localized, Language, Screen, ScreenProps, ScreenType};

/// Prints one render pass of the given screen.
pub fn render_screen(props: &ScreenProps<'_>) {
    let mut lines = props.text_lines();
    if let Some(title) = lines.next() {
        println!();
        println!("{}", title.bright_blue().bold());
    }
    for line in lines {
        println!("{}", line.bright_black());
    }
    println!();

    match props.screen.screen_type {
        ScreenType::Presentation => render_presentation(props),
        ScreenType::Pricing => render_pricing(props),
        ScreenType::Ecosystem => render_ecosystem(props),
        ScreenType::Applications => render_applications(props),
        ScreenType::Agenda => {
            if let Some(note_id) = &props.one_shot.initial_note_id {
                println!(
                    "{}",
                    localized(
                        props.language,
                        &format!("(appunto aperto: {note_id})"),
                        &format!("(note opened: {note_id})"),
                    )
                    .bright_yellow()
                );
            }
        }
        // Title, summary, dashboard and tasks render text plus actions only.
        _ => {}
    }

    render_actions(props.screen, props.language);
}

fn render_presentation(props: &ScreenProps<'_>) {
    for (i, step) in props.screen.steps.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_cyan(),
            step.text.resolve(props.language)
        );
    }
    if let Some(next) = &props.screen.next {
        println!();
        println!(
            "{}",
            localized(
                props.language,
                &format!("[invio] continua -> {next}"),
                &format!("[enter] continue -> {next}"),
            )
            .bright_black()
        );
    }
}

fn render_pricing(props: &ScreenProps<'_>) {
    let language = props.language;
    for scenario in &props.screen.scenarios {
        println!("{}", scenario.title.resolve(language).bright_cyan().bold());
        println!("{}", scenario.description.resolve(language).bright_black());
        for tier in &scenario.tiers {
            println!(
                "  - {}: {}",
                tier.service.resolve(language),
                tier.cost.resolve(language).green()
            );
        }
        println!();
    }

    if let Some(producer) = &props.screen.data_producer {
        println!("{}", producer.title.resolve(language).bright_cyan().bold());
        println!("{}", producer.subtitle.resolve(language).bright_black());
        for point in &producer.description_points {
            println!("  * {}", point.resolve(language));
        }
        println!("{}", producer.benefit_title.resolve(language).bold());
        println!("{}", producer.benefit_description.resolve(language));
        for item in &producer.benefit_checklist {
            println!("  {} {}", "✓".green(), item.resolve(language));
        }
        println!();
    }

    if let Some(agent) = &props.screen.syd_agent {
        println!("{}", agent.title.resolve(language).bright_cyan().bold());
        println!("{}", agent.subtitle.resolve(language).bright_black());
        for plan in &agent.plans {
            println!(
                "  - {} ({}): {}",
                plan.plan.resolve(language).bold(),
                plan.company_size.resolve(language),
                plan.price.resolve(language).green()
            );
            println!("      {}", plan.includes.resolve(language).bright_black());
        }
        println!(
            "{}",
            agent.additional_services_title.resolve(language).bold()
        );
        for service in &agent.additional_services {
            println!(
                "  - {} ({}): {}",
                service.service.resolve(language),
                service.when.resolve(language),
                service.cost.resolve(language).green()
            );
        }
        println!();
    }
}

fn render_ecosystem(props: &ScreenProps<'_>) {
    let Some(eco) = &props.screen.ecosystem else {
        return;
    };
    let language = props.language;
    println!("{}", eco.title.resolve(language).bright_cyan().bold());
    println!("{}", eco.subtitle.resolve(language).bright_black());
    println!(
        "  {} <-> {} <-> {}",
        eco.gateway_producer.resolve(language),
        eco.gateway_title.resolve(language).bold(),
        eco.gateway_user.resolve(language)
    );
    println!("{}", eco.services_title.resolve(language).bold());
    for service in &eco.services {
        println!(
            "  - {}: {}",
            service.title.resolve(language),
            service.description.resolve(language).bright_black()
        );
    }
    println!();
}

fn render_applications(props: &ScreenProps<'_>) {
    for link in &props.screen.links {
        println!(
            "  - {}: {}",
            link.label.resolve(props.language),
            link.href.bright_blue().underline()
        );
    }
    println!();
}

fn render_actions(screen: &Screen, language: Language) {
    for (i, action) in screen.actions.iter().enumerate() {
        println!(
            "  {} {}",
            format!("[{}]", i + 1).bright_cyan(),
            action.label.resolve(language)
        );
    }
}
