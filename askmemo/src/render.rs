//! Plain-text rendering of an `Answer`.
//!
//! The advice sections are fixed text; only the question and the reference
//! cards vary between answers.

use crate::interface::{Answer, Reference};
use std::fmt;

pub const LOADING_MESSAGE: &str = "メモを読み込み中...";
pub const EMPTY_QUESTION_MESSAGE: &str = "相談内容を入力してください。";
pub const NO_MATCH_MESSAGE: &str = "一致するメモが見つかりませんでした。別の表現を試してください。";

pub const INTERPRETATION_TITLE: &str = "今の状況の解釈";
pub const DECISION_AXES_TITLE: &str = "判断の軸（3〜5個）";
pub const NEXT_STEPS_TITLE: &str = "次の一手（すぐできる3つ）";
pub const REFERENCES_TITLE: &str = "参考にしたメモ";

pub const DECISION_AXES: [&str; 4] = [
    "時間軸: 6ヶ月後の自分が喜ぶ選択か",
    "資源: 使える時間・お金・集中力は十分か",
    "勢い: 今の好奇心が続くテーマか",
    "リスク: 最悪のケースを受け止められるか",
];

pub const NEXT_STEPS: [&str; 3] = [
    "24時間以内に小さく試せる行動を1つ決める",
    "関係者に相談するための要点を3行でまとめる",
    "1週間後に振り返るチェックポイントを作る",
];

/// Render `answer` as plain text. An answer without references renders
/// `NO_MATCH_MESSAGE` alone.
pub fn render_answer(answer: &Answer) -> String {
    AnswerView(answer).to_string()
}

/// Interpretation paragraph quoting the question
pub fn interpretation(question: &str) -> String {
    format!(
        "「{question}」は、価値観と現実のバランスをどう取るかが焦点です。\
         過去メモからは、一歩踏み出す前に小さく試すことで迷いが減る傾向が見えます。"
    )
}

struct AnswerView<'a>(&'a Answer);

impl fmt::Display for AnswerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let answer = self.0;
        if !answer.has_matches() {
            return writeln!(f, "{NO_MATCH_MESSAGE}");
        }

        writeln!(f, "■ {INTERPRETATION_TITLE}")?;
        writeln!(f, "{}", interpretation(&answer.question))?;
        writeln!(f)?;

        writeln!(f, "■ {DECISION_AXES_TITLE}")?;
        for axis in DECISION_AXES {
            writeln!(f, "・{axis}")?;
        }
        writeln!(f)?;

        writeln!(f, "■ {NEXT_STEPS_TITLE}")?;
        for step in NEXT_STEPS {
            writeln!(f, "・{step}")?;
        }

        writeln!(f)?;
        writeln!(f, "■ {REFERENCES_TITLE}")?;
        for reference in &answer.references {
            writeln!(f)?;
            write!(f, "{}", CardView(reference))?;
        }
        Ok(())
    }
}

struct CardView<'a>(&'a Reference);

impl fmt::Display for CardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.0.card;
        writeln!(f, "## {}", card.title)?;
        write!(f, "[{}]", card.date)?;
        for tag in &card.tags {
            write!(f, " #{tag}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.0.excerpt)
    }
}
