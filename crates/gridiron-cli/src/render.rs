//! Plain-text rendering of recommendations.

use std::io::{self, Write};

use gridiron_analysis::{
    aggregate::IdealPlay,
    insights::{Insights, StyleProfile},
    report::{LikelihoodLine, OutcomeKind, Recommendation, RecommendationReport},
};
use gridiron_engine::PlayRecord;

pub(crate) fn write_recommendation<W>(out: &mut W, recommendation: &Recommendation) -> io::Result<()>
where
    W: Write + ?Sized,
{
    match recommendation {
        Recommendation::NoMatch => writeln!(out, "No Match Found! Good Luck!\n"),
        Recommendation::NoGain { game_ids } => write_no_gain(out, game_ids),
        Recommendation::Found(report) => write_report(out, report),
    }
}

fn write_no_gain<W>(out: &mut W, game_ids: &[u64]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    if game_ids.len() > 1 {
        writeln!(out, "Matches found, but with no gain. Here are their game IDs:")?;
    } else {
        writeln!(out, "Match found, but with no gain. Here is its game ID:")?;
    }
    for game_id in game_ids {
        writeln!(out, "    {game_id}")?;
    }
    writeln!(out)
}

fn write_report<W>(out: &mut W, report: &RecommendationReport) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let heading = if report.is_plural() {
        "THE IDEAL PLAYS' LIKELIHOODS ARE:"
    } else {
        "THE IDEAL PLAY'S LIKELIHOOD IS:"
    };
    writeln!(
        out,
        "\nOUT OF {} SIMILAR SITUATIONS, {heading}",
        report.candidate_count
    )?;
    for ideal in &report.ideal_plays {
        writeln!(out, "    {}: {:.2}%", ideal_label(ideal), ideal.percentage)?;
    }

    writeln!(out, "\nLIKELIHOODS:")?;
    for line in &report.likelihoods {
        write_likelihood(out, line)?;
    }

    write_best_play(out, &report.best_play)?;

    if let Some(insights) = &report.insights {
        write_insights(out, insights)?;
    }
    writeln!(out)
}

fn ideal_label(ideal: &IdealPlay) -> String {
    let combo = &ideal.combo;
    if combo.is_field_goal() {
        format!("{} IN {} FORMATION", combo.play_type, combo.sub_type)
    } else {
        format!("{} {}", combo.play_type, combo.sub_type)
    }
}

fn write_likelihood<W>(out: &mut W, line: &LikelihoodLine) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "    {}: {:.2}%", line.outcome, line.percentage)?;
    let (pass_label, rush_label) = match line.outcome {
        OutcomeKind::TwoPointConversion => ("Two Point Pass", "Two Point Rush"),
        OutcomeKind::FirstDown | OutcomeKind::Touchdown | OutcomeKind::FieldGoal => {
            ("Passing", "Rushing")
        }
    };
    if let Some(pass) = line.pass {
        writeln!(out, "        {pass_label}: {pass:.2}%")?;
    }
    if let Some(rush) = line.rush {
        writeln!(out, "        {rush_label}: {rush:.2}%")?;
    }
    Ok(())
}

fn write_best_play<W>(out: &mut W, play: &PlayRecord) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let call = play.call();
    let outcome = play.outcome();
    let situation = play.situation();
    let game = play.game();

    write!(out, "\nBEST HISTORICAL PLAY: {}", call.play_type)?;
    if call.is_pass {
        write!(out, " {}", call.pass_type)?;
    } else if call.is_rush {
        write!(out, " {}", call.rush_direction)?;
    }
    writeln!(
        out,
        " with {} {} formation",
        article(&call.formation),
        call.formation
    )?;

    if outcome.two_point_attempt && outcome.two_point_success {
        writeln!(
            out,
            "    On {}, {} scored 2 points against {} during quarter {} at time {}.",
            game.game_date,
            game.offense,
            game.defense,
            situation.quarter(),
            situation.clock()
        )?;
    } else {
        writeln!(
            out,
            "    On {}, {} gained {} yards against {} during quarter {} on down {} on the {} yard line with {} yards to go at time {}.",
            game.game_date,
            game.offense,
            outcome.yards,
            game.defense,
            situation.quarter(),
            situation.down(),
            situation.yard_line(),
            situation.to_go(),
            situation.clock()
        )?;
    }

    let result = if outcome.two_point_attempt {
        if outcome.two_point_success {
            "was a Two Point Conversion and was successful."
        } else {
            "was a Two Point Conversion and was not successful."
        }
    } else if outcome.touchdown {
        "resulted in a touchdown."
    } else if outcome.first_down {
        "did not result in a touchdown, but it did result in a first down."
    } else {
        "did not result in a touchdown or a first down."
    };
    writeln!(out, "The play {result}")?;
    writeln!(out, "Description: {}", call.description)?;
    writeln!(out, "Game ID: {}", play.game_id())
}

fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A' | 'E' | 'I' | 'O' | 'U') => "an",
        _ => "a",
    }
}

fn write_insights<W>(out: &mut W, insights: &Insights) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let run_pass = &insights.run_pass;
    writeln!(out, "\nINSIGHTS:")?;
    writeln!(out, "    Lean: {}", run_pass.lean)?;
    writeln!(out, "    Strategy: {}", insights.strategy)?;
    write_style(out, "Rushing", &run_pass.rush)?;
    write_style(out, "Passing", &run_pass.pass)?;

    let risk = &insights.risk;
    writeln!(out, "    Risk:")?;
    writeln!(out, "        Turnovers: {:.2}%", risk.turnover_rate)?;
    writeln!(out, "        Interceptions: {:.2}%", risk.interception_rate)?;
    writeln!(out, "        Fumbles: {:.2}%", risk.fumble_rate)?;
    writeln!(out, "        Sacks: {:.2}%", risk.sack_rate)?;
    writeln!(out, "        Negative plays: {:.2}%", risk.negative_play_rate)?;
    writeln!(out, "        Incompletions: {:.2}%", risk.incompletion_rate)?;

    if let Some(yardage) = &insights.yardage {
        writeln!(
            out,
            "    Yards: min {}, median {}, mean {:.2}, max {}, std dev {:.2} over {} plays",
            yardage.min, yardage.median, yardage.mean, yardage.max, yardage.std_dev, yardage.count
        )?;
    }

    if !insights.play_types.is_empty() {
        writeln!(out, "    Play types:")?;
        for stats in &insights.play_types {
            writeln!(
                out,
                "        {} {}: {} attempts, {:.2}% success, {:.2} avg yards, {} TD, {} turnovers",
                stats.combo.play_type,
                stats.combo.sub_type,
                stats.attempts,
                stats.success_rate,
                stats.avg_yards,
                stats.touchdowns,
                stats.turnovers
            )?;
        }
    }
    Ok(())
}

fn write_style<W>(out: &mut W, label: &str, profile: &StyleProfile) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        out,
        "    {label}: {} attempts, {:.2}% success, {:.2} avg yards, {:.2}% first downs, {:.2}% turnovers",
        profile.attempts,
        profile.success_rate,
        profile.avg_yards,
        profile.first_down_rate,
        profile.turnover_rate
    )
}
