use libtest_mimic::Trial;

use reportify::cli::{Prompt, Script};
use reportify::config::Settings;
use reportify::error::{Error, Result};
use reportify::report::run_report;

use crate::utils::{Fixture, trial};

pub fn tests(tests: &mut Vec<Trial>) {
    tests.push(trial(
        "report::block_matches_session",
        block_matches_session,
    ));
    tests.push(trial(
        "report::console_echo_respects_debug",
        console_echo_respects_debug,
    ));
    tests.push(trial(
        "report::negative_count_writes_empty_lists",
        negative_count_writes_empty_lists,
    ));
    tests.push(trial(
        "report::bad_number_aborts_without_writing",
        bad_number_aborts_without_writing,
    ));
    tests.push(trial("report::bad_count_aborts", bad_count_aborts));
    tests.push(trial("report::huge_count_is_not_fatal", huge_count_is_not_fatal));
    tests.push(trial(
        "report::successive_runs_only_append",
        successive_runs_only_append,
    ));
}

async fn block_matches_session() -> Result<()> {
    let fx = Fixture::new();
    let prompt = Prompt::scripted(["3", "2.0", "1.0", "2.0"]);

    run_report(&fx.client, &prompt, &fx.settings).await?;

    let body = std::fs::read_to_string(fx.results_path())?;
    assert_eq!(
        body,
        "Initial list: [2.0, 1.0, 2.0]\n\
         [WARNING]: There are duplicates in the list.\n\
         Duplicate numbers: 2.0\n\
         Number of duplicates: 1\n\
         Sorted numbers: [1.0, 2.0, 2.0]\n\n"
    );
    Ok(())
}

async fn console_echo_respects_debug() -> Result<()> {
    // Debug on: warnings reach the console as well as the file.
    let fx = Fixture::new();
    let script = Script::new(["2", "5.0", "5.0"]);
    run_report(&fx.client, &Prompt::Scripted(script.clone()), &fx.settings).await?;

    let transcript = script.transcript();
    assert!(
        transcript
            .iter()
            .any(|l| l == "[WARNING]: There are duplicates in the list.")
    );
    assert!(transcript.iter().any(|l| l == "[5.0, 5.0]"));

    // Debug off: sorted list still prints, warnings only go to the file.
    let fx = Fixture::new();
    let settings = Settings {
        debug: false,
        ..fx.settings.clone()
    };
    let script = Script::new(["2", "5.0", "5.0"]);
    run_report(&fx.client, &Prompt::Scripted(script.clone()), &settings).await?;

    let transcript = script.transcript();
    assert!(transcript.iter().all(|l| !l.starts_with("[WARNING]")));
    assert!(transcript.iter().any(|l| l == "[5.0, 5.0]"));
    let body = std::fs::read_to_string(fx.results_path())?;
    assert!(body.contains("[WARNING]: There are duplicates in the list."));
    Ok(())
}

async fn negative_count_writes_empty_lists() -> Result<()> {
    let fx = Fixture::new();
    let prompt = Prompt::scripted(["-3"]);

    run_report(&fx.client, &prompt, &fx.settings).await?;

    let body = std::fs::read_to_string(fx.results_path())?;
    assert_eq!(body, "Initial list: []\nSorted numbers: []\n\n");
    Ok(())
}

async fn bad_number_aborts_without_writing() -> Result<()> {
    let fx = Fixture::new();
    let prompt = Prompt::scripted(["2", "1.5", "abc"]);

    let err = run_report(&fx.client, &prompt, &fx.settings)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { .. }));
    assert!(!fx.results_path().exists());
    Ok(())
}

async fn bad_count_aborts() -> Result<()> {
    let fx = Fixture::new();
    let prompt = Prompt::scripted(["many"]);

    let err = run_report(&fx.client, &prompt, &fx.settings)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidCount { .. }));
    assert!(!fx.results_path().exists());
    Ok(())
}

async fn huge_count_is_not_fatal() -> Result<()> {
    // i64::MAX is a valid count; it must run out of input, not allocate.
    let fx = Fixture::new();
    let prompt = Prompt::scripted(["9223372036854775807", "1.0"]);

    let err = run_report(&fx.client, &prompt, &fx.settings)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Prompt { .. }));
    assert!(!fx.results_path().exists());
    Ok(())
}

async fn successive_runs_only_append() -> Result<()> {
    let fx = Fixture::new();

    run_report(&fx.client, &Prompt::scripted(["1", "9.0"]), &fx.settings).await?;
    let before = std::fs::read(fx.results_path())?;

    run_report(&fx.client, &Prompt::scripted(["1", "7.5"]), &fx.settings).await?;
    let after = std::fs::read(fx.results_path())?;

    assert!(after.starts_with(&before));
    let body = String::from_utf8(after).unwrap();
    assert!(body.contains("Sorted numbers: [9.0]\n"));
    assert!(body.contains("Sorted numbers: [7.5]\n"));
    Ok(())
}
