//! Play-by-play corpus ingestion.
//!
//! The corpus is a comma-separated file with a header row and 26 columns per
//! play. Columns are read by position, not by header name. Boolean columns
//! hold integers where exactly `1` means true.
//!
//! Rows that cannot be decoded, carry an unrecognized date, or describe a
//! situation outside the engine's domain (overtime quarters, negative yard
//! lines, ...) are skipped and counted.

use std::{fs::File, io, path::Path, sync::Arc};

use anyhow::Context;
use chrono::NaiveDate;
use gridiron_engine::{PlayBuildError, PlayBuilder, PlayCall, PlayOutcome, PlayRecord};
use serde::Deserialize;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

pub(crate) fn read_corpus(path: &Path) -> anyhow::Result<Vec<Arc<PlayRecord>>> {
    log::info!("Loading plays from {}...", path.display());
    let file = File::open(path)
        .with_context(|| format!("Failed to open play corpus: {}", path.display()))?;
    let plays = read_plays(file)
        .with_context(|| format!("Failed to read play corpus: {}", path.display()))?;
    log::info!("Loaded {} plays", plays.len());
    Ok(plays)
}

pub(crate) fn read_plays<R>(reader: R) -> Result<Vec<Arc<PlayRecord>>, csv::Error>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut plays = Vec::new();
    let mut skipped = 0_usize;
    let mut record = csv::StringRecord::new();
    loop {
        let line = reader.position().line() + 1;
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                skipped += 1;
                log::debug!("skipping line {line}: {err}");
                continue;
            }
        }
        let line = record.position().map_or(line, csv::Position::line);
        match decode_row(&record) {
            Ok(play) => plays.push(Arc::new(play)),
            Err(err) => {
                skipped += 1;
                log::debug!("skipping line {line}: {err}");
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} malformed or out-of-range rows");
    }
    Ok(plays)
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum RowError {
    #[display("{_0}")]
    Decode(csv::Error),
    #[display("unrecognized game date {value:?}")]
    Date { value: String },
    #[display("{_0}")]
    Play(PlayBuildError),
}

fn decode_row(record: &csv::StringRecord) -> Result<PlayRecord, RowError> {
    let row = record
        .deserialize::<PlayRow>(None)
        .map_err(RowError::Decode)?;
    row.into_play()
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

fn flag(value: i64) -> bool {
    value == 1
}

/// One corpus row, in column order.
#[derive(Debug, Clone, Deserialize)]
struct PlayRow {
    game_id: u64,
    game_date: String,
    quarter: u8,
    minute: u8,
    second: u8,
    offense_team: String,
    defense_team: String,
    down: u8,
    to_go: u8,
    yard_line: u8,
    is_first_down: i64,
    description: String,
    yards: i32,
    formation: String,
    play_type: String,
    is_rush: i64,
    is_pass: i64,
    is_incomplete: i64,
    is_touchdown: i64,
    pass_type: String,
    is_sack: i64,
    is_interception: i64,
    is_fumble: i64,
    is_two_point_conversion: i64,
    is_two_point_conversion_successful: i64,
    rush_direction: String,
}

impl PlayRow {
    fn into_play(self) -> Result<PlayRecord, RowError> {
        let Some(game_date) = parse_date(&self.game_date) else {
            return Err(RowError::Date {
                value: self.game_date,
            });
        };
        let call = PlayCall {
            play_type: self.play_type,
            formation: self.formation,
            pass_type: self.pass_type,
            rush_direction: self.rush_direction,
            is_pass: flag(self.is_pass),
            is_rush: flag(self.is_rush),
            description: self.description,
        };
        let outcome = PlayOutcome {
            yards: self.yards,
            first_down: flag(self.is_first_down),
            touchdown: flag(self.is_touchdown),
            incomplete: flag(self.is_incomplete),
            interception: flag(self.is_interception),
            fumble: flag(self.is_fumble),
            sack: flag(self.is_sack),
            two_point_attempt: flag(self.is_two_point_conversion),
            two_point_success: flag(self.is_two_point_conversion_successful),
        };
        PlayBuilder::new()
            .game_id(self.game_id)
            .game_date(game_date)
            .teams(self.offense_team, self.defense_team)
            .quarter(self.quarter)
            .down(self.down)
            .to_go(self.to_go)
            .yard_line(self.yard_line)
            .clock(self.minute, self.second)
            .call(call)
            .outcome(outcome)
            .build()
            .map_err(RowError::Play)
    }
}

#[cfg(test)]
mod tests {
    use gridiron_engine::{ClockError, PlayStyle, SituationError};

    use super::*;

    const HEADER: &str = "GameId,GameDate,Quarter,Minute,Second,OffenseTeam,DefenseTeam,Down,ToGo,YardLine,\
        IsFirstDown,Description,Yards,Formation,PlayType,IsRush,IsPass,IsIncomplete,IsTouchdown,\
        PassType,IsSack,IsInterception,IsFumble,IsTwoPointConversion,IsTwoPointConversionSuccessful,\
        RushDirection";

    const PASS_ROW: &str = "2023091007,2023-09-10,2,4,12,KC,DET,3,7,62,1,\
        \"(4:12) P.MAHOMES PASS SHORT RIGHT TO T.KELCE, 9 YARDS\",9,SHOTGUN,PASS,0,1,0,0,\
        SHORT RIGHT,0,0,0,0,0,";

    const RUSH_ROW: &str = "2023091007,09/10/2023,4,0,40,DET,KC,0,0,98,0,\
        TWO-POINT CONVERSION ATTEMPT. D.MONTGOMERY RUSHES RIGHT TACKLE,0,UNDER CENTER,RUSH,1,0,0,0,\
        ,0,0,0,1,1,RIGHT TACKLE";

    fn corpus(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    fn read(rows: &[&str]) -> Vec<Arc<PlayRecord>> {
        read_plays(corpus(rows).as_bytes()).unwrap()
    }

    mod decode {
        use super::*;

        #[test]
        fn test_pass_row_fields() {
            let plays = read(&[PASS_ROW]);
            assert_eq!(plays.len(), 1);
            let play = &plays[0];
            assert_eq!(play.game_id(), 2_023_091_007);
            assert_eq!(
                play.game().game_date,
                NaiveDate::from_ymd_opt(2023, 9, 10).unwrap()
            );
            assert_eq!(play.game().offense, "KC");
            let situation = play.situation();
            assert_eq!(
                (situation.quarter(), situation.down(), situation.to_go()),
                (2, 3, 7)
            );
            assert_eq!(situation.yard_line(), 62);
            assert_eq!(situation.clock().to_string(), "04:12");
            assert_eq!(play.call().style(), Some(PlayStyle::Pass));
            assert_eq!(play.call().pass_type, "SHORT RIGHT");
            assert!(play.call().description.contains("T.KELCE, 9 YARDS"));
            assert_eq!(play.outcome().yards, 9);
            assert!(play.outcome().first_down);
            assert!(!play.outcome().touchdown);
        }

        #[test]
        fn test_slash_dates_and_conversion_flags() {
            let plays = read(&[RUSH_ROW]);
            let play = &plays[0];
            assert_eq!(
                play.game().game_date,
                NaiveDate::from_ymd_opt(2023, 9, 10).unwrap()
            );
            assert!(play.situation().is_two_point_attempt());
            assert!(play.outcome().two_point_attempt);
            assert!(play.outcome().two_point_success);
            assert_eq!(play.call().rush_direction, "RIGHT TACKLE");
            assert_eq!(play.call().pass_type, "");
        }

        #[test]
        fn test_only_one_is_true() {
            let row = PASS_ROW.replacen(",1,\"", ",2,\"", 1);
            let plays = read(&[row.as_str()]);
            assert!(!plays[0].outcome().first_down);
        }
    }

    mod skipping {
        use super::*;

        #[test]
        fn test_bad_rows_are_skipped_not_fatal() {
            let overtime = PASS_ROW.replacen(",2,4,12,", ",5,4,12,", 1);
            let bad_date = PASS_ROW.replacen("2023-09-10", "Sept 10", 1);
            let bad_number = PASS_ROW.replacen(",3,7,62,", ",3,seven,62,", 1);
            let short = "2023091007,2023-09-10,2";
            let plays = read(&[
                overtime.as_str(),
                PASS_ROW,
                bad_date.as_str(),
                bad_number.as_str(),
                short,
                RUSH_ROW,
            ]);
            assert_eq!(plays.len(), 2);
            assert_eq!(plays[0].situation().down(), 3);
            assert!(plays[1].outcome().two_point_attempt);
        }

        #[test]
        fn test_row_errors_name_the_cause() {
            let row = |text: &str| {
                let mut reader = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .from_reader(text.as_bytes());
                let record = reader.records().next().unwrap().unwrap();
                decode_row(&record).unwrap_err()
            };

            let overtime = PASS_ROW.replacen(",2,4,12,", ",5,4,12,", 1);
            assert!(matches!(
                row(&overtime),
                RowError::Play(PlayBuildError::Situation(SituationError::Quarter { .. }))
            ));
            let late = PASS_ROW.replacen(",2,4,12,", ",2,15,30,", 1);
            assert!(matches!(
                row(&late),
                RowError::Play(PlayBuildError::Clock(ClockError::PastQuarterLength))
            ));
            let bad_date = PASS_ROW.replacen("2023-09-10", "20230910", 1);
            assert!(matches!(row(&bad_date), RowError::Date { .. }));
        }

        #[test]
        fn test_header_only_corpus_is_empty() {
            assert!(read(&[]).is_empty());
        }
    }
}
