//! Interactive console front end.
//!
//! The console UI speaks Russian, matching the game's display language
//! (the hint tokens themselves are fixed Russian words). All game text
//! goes to stdout; diagnostics go through `tracing` to stderr.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::engine::GameSession;
use crate::models::Game;
use crate::store::GameStore;

/// Play one game from the terminal: prompt for a name, then loop on
/// guesses until the secret is found.
pub fn run_new_game(store: &dyn GameStore) -> Result<()> {
    show_welcome();

    let player_name = loop {
        let name = prompt("Введите ваше имя: ")?;
        if !name.is_empty() {
            break name;
        }
        println!("Ошибка: Имя не может быть пустым");
    };

    let mut session = GameSession::start(store, &player_name)?;

    loop {
        let raw = prompt("Введите трехзначное число: ")?;
        let report = session.submit_guess(&raw)?;

        if !report.accepted {
            println!("Ошибка: Введите корректное трехзначное число");
            continue;
        }

        if report.won == Some(true) {
            println!();
            println!(
                "Поздравляем! Вы угадали число за {} попыток!",
                session.attempt_count()
            );
            println!();
            return Ok(());
        }

        let hints = report.hints.expect("accepted guess always carries hints");
        println!(
            "Подсказки: {} {} {}",
            hints[0], hints[1], hints[2]
        );
    }
}

/// Print all saved games, newest first.
pub fn run_list_games(store: &dyn GameStore) -> Result<()> {
    let games = store.list_games()?;

    if games.is_empty() {
        println!("Сохраненных партий пока нет.");
        return Ok(());
    }

    println!();
    println!("{:<6} {:<20} {:<8} {:<12} {}", "ID", "Игрок", "Число", "Результат", "Начата");
    println!("{}", "-".repeat(66));
    for game in &games {
        println!(
            "{:<6} {:<20} {:<8} {:<12} {}",
            game.id,
            game.player_name,
            game.secret_number,
            outcome_label(game),
            game.created_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    println!();

    Ok(())
}

/// Replay one saved game: the header plus every attempt in order.
pub fn run_replay(store: &dyn GameStore, game_id: i64) -> Result<()> {
    let Some(game) = store.get_game(game_id)? else {
        println!("Партия с ID {} не найдена.", game_id);
        return Ok(());
    };

    let attempts = store.list_attempts(game_id)?;

    println!();
    println!("Партия #{} — игрок: {}", game.id, game.player_name);
    println!("Загаданное число: {}", game.secret_number);
    println!("Результат: {}", outcome_label(&game));
    println!();

    if attempts.is_empty() {
        println!("Попыток не было.");
    } else {
        for attempt in &attempts {
            println!(
                "Попытка {}: {} -> {}",
                attempt.attempt_number, attempt.guess, attempt.hints
            );
        }
    }
    println!();

    Ok(())
}

fn outcome_label(game: &Game) -> &'static str {
    if game.is_finished() {
        "угадал"
    } else {
        "не завершена"
    }
}

fn show_welcome() {
    println!();
    println!("===========================================");
    println!("   Добро пожаловать в игру \"Холодно-горячо\"!");
    println!("===========================================");
    println!();
    println!("Правила игры:");
    println!("  - Компьютер загадал трехзначное число без повторяющихся цифр");
    println!("  - Первая цифра не может быть нулем");
    println!("  - После каждой попытки вы получите подсказки:");
    println!("    * Горячо  - цифра на своем месте");
    println!("    * Тепло   - цифра есть, но не на своем месте");
    println!("    * Холодно - такой цифры нет в числе");
    println!("  - Подсказки выводятся в порядке: Горячо, Тепло, Холодно");
    println!();
}

/// Print a prompt and read one trimmed line from stdin. Fails if stdin is
/// closed; the interactive loop cannot continue without input.
fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("Input stream closed");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
