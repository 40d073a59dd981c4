//! コンソールで動作する最小 UI。
//!
//! AI種別の選択、盤面描画、座標入力、手番の交互進行のみを担当する。
//! 勝敗判定と手選択はすべて `marubatsu_core` 側の責務。

use marubatsu_core::{ai, engine};
use std::io::{self, BufRead, Write};

/// 盤の一辺の長さ。
const BOARD_LEN: u8 = 3;

/// 標準入力から1行読む（EOF なら `None`）。
fn read_line<I>(lines: &mut I) -> Option<String>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(_)) | None => None,
    }
}

/// プロンプトを表示して入力を促す。
fn prompt(text: &str) {
    print!("{text}");
    let _flushed = io::stdout().flush();
}

/// AI種別の選択メニューを表示する。
fn show_type_select_message() {
    println!("対戦したい <<AI TYPE>> を選択してください。");
    println!("1 → SEQUENTIAL");
    println!("2 → ALPHA_BETA");
    println!("3 → NEGA_MAX");
    println!();
}

/// 有効な種別が入力されるまで読み続ける（EOF なら `None`）。
///
/// 範囲外の選択は構成エラーとして拒否し、`Match` を生成しない。
fn ai_type_setting<I>(lines: &mut I) -> Option<ai::Kind>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        prompt(">");
        let line = read_line(lines)?;

        let selection = match line.trim().parse::<u8>() {
            Ok(value) => value,
            Err(_parse_error) => continue,
        };
        let index = match selection.checked_sub(1) {
            Some(value) => value,
            None => continue,
        };

        if let Some(kind) = ai::Kind::from_index(index) {
            return Some(kind);
        }
    }
}

/// ゲーム開始時のバナーを表示する。
fn show_start_message(label: &str) {
    println!("========================");
    println!("       GAME START       ");
    println!();
    println!("AI TYPE : {label}");
    println!();
    println!("input position likes 1 a");
    println!("========================");
}

/// 勝敗に応じた終了メッセージを表示する。
fn show_end_message(outcome: engine::Outcome) {
    match outcome {
        engine::Outcome::FirstWins => println!("You win!"),
        engine::Outcome::SecondWins => println!("You lose..."),
        _ => println!("Draw"),
    }
    println!();
}

/// マスの中身を1文字で返す（o = 人間、x = AI）。
fn mark_char(board: &engine::Board, square: engine::Square) -> char {
    match board.mark_at(square) {
        Some(engine::Player::First) => 'o',
        Some(engine::Player::Second) => 'x',
        _ => ' ',
    }
}

/// 盤面を描画する（列は 1..=3、行は a..=c）。
fn show_board(board: &engine::Board) {
    println!("    1   2   3");
    println!("  +---+---+---+");

    for y in u8::MIN..BOARD_LEN {
        let row_label = char::from(b'a'.saturating_add(y));
        print!("{row_label} |");
        for x in u8::MIN..BOARD_LEN {
            let mark = match engine::Square::from_xy(x, y) {
                Some(square) => mark_char(board, square),
                None => ' ',
            };
            print!(" {mark} |");
        }
        println!();
        println!("  +---+---+---+");
    }
}

/// `1 a` 形式の入力から盤面座標（x, y）を取り出す。
///
/// 数字（列）と英字（行）は順不同で受け付ける。
fn parse_position(line: &str) -> Option<(u8, u8)> {
    let mut x = None;
    let mut y = None;

    for ch in line.chars() {
        match ch {
            '1'..='3' => {
                let digit = u32::from(ch).checked_sub(u32::from('1'))?;
                x = u8::try_from(digit).ok();
            }
            'a'..='c' => {
                let letter = u32::from(ch).checked_sub(u32::from('a'))?;
                y = u8::try_from(letter).ok();
            }
            _ => {}
        }
    }

    match (x, y) {
        (Some(col), Some(row)) => Some((col, row)),
        _ => None,
    }
}

/// 人間の1手が成立するまで入力を繰り返す（EOF なら `false`）。
fn human_move<I>(lines: &mut I, game: &mut engine::Match) -> bool
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        prompt("? ");
        let line = match read_line(lines) {
            Some(value) => value,
            None => return false,
        };

        if let Some((x, y)) = parse_position(&line) {
            if game.put(x, y) {
                return true;
            }
        }
    }
}

/// 1ゲームを終局まで進める（EOF なら `false`）。
fn run_match<I>(lines: &mut I, game: &mut engine::Match) -> bool
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut human_turn = true;

    loop {
        show_board(game.board());

        let outcome = game.status();
        if outcome.is_finished() {
            show_end_message(outcome);
            return true;
        }

        if human_turn {
            if !human_move(lines, game) {
                return false;
            }
        } else {
            if !game.select_move() {
                // AIの投了は人間の勝ち扱い。
                show_end_message(engine::Outcome::FirstWins);
                return true;
            }
            println!();
        }

        human_turn = !human_turn;
    }
}

/// JSON形式のログ購読を初期化する。
fn init_tracing() {
    let _result = tracing_subscriber::fmt().json().try_init();
}

fn main() {
    init_tracing();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        show_type_select_message();

        let kind = match ai_type_setting(&mut lines) {
            Some(value) => value,
            None => break,
        };
        tracing::info!(kind = kind.label(), "match started");

        let mut game = engine::Match::new(kind);
        show_start_message(kind.label());

        if !run_match(&mut lines, &mut game) {
            break;
        }
        tracing::info!(outcome = ?game.status(), turns = game.turns(), "match finished");
    }
}
