use crate::CommandMeta;
use crate::fun::pick;
use maple_core::{Context, Error};
use maple_utils::formatting::escape_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "8ball",
    desc: "Ask the magic 8-ball.",
    category: "fun",
    usage: "/8ball <question>",
    placeholder: false,
};

pub const ANSWERS: &[&str] = &[
    "It is certain",
    "Reply hazy, try again",
    "Don't count on it",
    "It is decidedly so",
    "Ask again later",
    "My reply is no",
    "Without a doubt",
    "Better not tell you now",
    "My sources say no",
    "Yes definitely",
    "Cannot predict now",
    "Outlook not so good",
    "You may rely on it",
    "Concentrate and ask again",
    "Very doubtful",
];

#[poise::command(slash_command, rename = "8ball", category = "Fun")]
pub async fn eightball(
    ctx: Context<'_>,
    #[description = "Your question"]
    #[max_length = 200]
    question: String,
) -> Result<(), Error> {
    ctx.say(eightball_reply(&question, pick(ANSWERS))).await?;
    Ok(())
}

pub fn eightball_reply(question: &str, answer: &str) -> String {
    format!("🎱 **{}**\n{}", escape_mentions(question), answer)
}

#[cfg(test)]
mod tests {
    use super::eightball_reply;

    #[test]
    fn echoes_the_question_in_bold() {
        assert_eq!(
            eightball_reply("Will it rain?", "Very doubtful"),
            "🎱 **Will it rain?**\nVery doubtful"
        );
    }

    #[test]
    fn answers_are_balanced() {
        assert_eq!(super::ANSWERS.len(), 15);
        let negatives = [
            "My reply is no",
            "My sources say no",
            "Outlook not so good",
            "Very doubtful",
            "Don't count on it",
        ];
        for negative in negatives {
            assert!(super::ANSWERS.contains(&negative), "{negative}");
        }
    }
}
