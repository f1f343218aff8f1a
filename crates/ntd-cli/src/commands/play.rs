use std::fmt::Display;
use std::io::{self, BufRead, Write};

use colored::Colorize;
use ntd_core::{Die, DieSet, ProbabilityMatrix};
use ntd_fair::{EntropySource, FairValueGenerator, OsEntropy};

use crate::table::probability_table;

pub fn run(dice: &DieSet) -> Result<(), String> {
    tracing::info!(dice = dice.len(), "starting game");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = Game::new(
        dice,
        stdin.lock(),
        stdout.lock(),
        FairValueGenerator::<OsEntropy>::new(),
    );
    let outcome = game.play()?;
    tracing::info!(?outcome, "game finished");
    Ok(())
}

/// How a finished game ended, from the user's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UserWins,
    ComputerWins,
    Tie,
}

enum Choice {
    Number(u32),
    Help,
    Exit,
    Invalid,
}

/// One game over a console. `None` from any step means the user left.
pub struct Game<'a, R, W, E> {
    dice: &'a DieSet,
    odds: ProbabilityMatrix,
    input: R,
    out: W,
    generator: FairValueGenerator<E>,
}

impl<'a, R: BufRead, W: Write, E: EntropySource> Game<'a, R, W, E> {
    pub fn new(dice: &'a DieSet, input: R, out: W, generator: FairValueGenerator<E>) -> Self {
        Self {
            dice,
            odds: ProbabilityMatrix::compute(dice),
            input,
            out,
            generator,
        }
    }

    pub fn play(&mut self) -> Result<Option<Outcome>, String> {
        let Some(user_first) = self.decide_first_move()? else {
            return Ok(None);
        };
        let Some((user_die, computer_die)) = self.choose_dice(user_first)? else {
            return Ok(None);
        };

        let user = self.die(user_die)?;
        let computer = self.die(computer_die)?;

        self.say("It's time for my throw.")?;
        let Some(my_throw) = self.fair_roll(&computer)? else {
            return Ok(None);
        };
        self.say(format!("My throw is {my_throw}."))?;

        self.say("It's time for your throw.")?;
        let Some(your_throw) = self.fair_roll(&user)? else {
            return Ok(None);
        };
        self.say(format!("Your throw is {your_throw}."))?;

        let outcome = match your_throw.cmp(&my_throw) {
            std::cmp::Ordering::Greater => {
                self.say(format!("You win ({your_throw} > {my_throw})!").green().bold())?;
                Outcome::UserWins
            }
            std::cmp::Ordering::Less => {
                self.say(format!("I win ({my_throw} > {your_throw})!").red().bold())?;
                Outcome::ComputerWins
            }
            std::cmp::Ordering::Equal => {
                self.say(format!("It's a tie ({my_throw} = {your_throw})!").yellow().bold())?;
                Outcome::Tie
            }
        };
        Ok(Some(outcome))
    }

    /// Returns whether the user moves first.
    fn decide_first_move(&mut self) -> Result<Option<bool>, String> {
        self.say("Let's determine who makes the first move.")?;
        let mut commitment = self.generator.commit(2).map_err(|e| e.to_string())?;
        let hmac = commitment.disclose().map_err(|e| e.to_string())?;
        self.say(format!(
            "I selected a random value in the range 0..1 (HMAC={hmac})."
        ))?;
        self.say("Try to guess my selection.")?;

        let guess = loop {
            self.say("0 - 0\n1 - 1\nX - exit\n? - help")?;
            match self.read_choice()? {
                Choice::Number(n) if n < 2 => break n,
                Choice::Help => self.show_help()?,
                Choice::Exit => return Ok(None),
                Choice::Number(_) | Choice::Invalid => {
                    self.say("Invalid input. Enter 0, 1, X, or ?.")?;
                }
            }
        };

        commitment.contribute(guess).map_err(|e| e.to_string())?;
        let reveal = commitment.reveal().map_err(|e| e.to_string())?;
        self.say(format!(
            "My selection: {} (KEY={}).",
            reveal.value(),
            reveal.key_hex()
        ))?;

        let user_first = guess == reveal.value();
        tracing::debug!(user_first, "first move decided");
        Ok(Some(user_first))
    }

    /// Returns `(user_die, computer_die)` indices.
    fn choose_dice(&mut self, user_first: bool) -> Result<Option<(usize, usize)>, String> {
        if user_first {
            self.say("You make the first move.")?;
            let Some(user) = self.select_die(None)? else {
                return Ok(None);
            };
            // Answer with the strongest counter; a single die has to be shared.
            let computer = self.odds.best_counter(user).unwrap_or(user);
            self.say(format!("I choose the [{}] dice.", self.die(computer)?))?;
            self.say(format!("You chose the [{}] dice.", self.die(user)?))?;
            Ok(Some((user, computer)))
        } else {
            let count = u32::try_from(self.dice.len()).map_err(|e| e.to_string())?;
            let computer = self.generator.pick(count).map_err(|e| e.to_string())? as usize;
            self.say(format!(
                "I make the first move and choose the [{}] dice.",
                self.die(computer)?
            ))?;
            let exclude = (self.dice.len() > 1).then_some(computer);
            let Some(user) = self.select_die(exclude)? else {
                return Ok(None);
            };
            self.say(format!("You chose the [{}] dice.", self.die(user)?))?;
            Ok(Some((user, computer)))
        }
    }

    fn select_die(&mut self, exclude: Option<usize>) -> Result<Option<usize>, String> {
        loop {
            self.say("Choose your dice:")?;
            for (i, die) in self.dice.iter().enumerate() {
                if Some(i) != exclude {
                    writeln!(self.out, "{i} - {die}").map_err(|e| e.to_string())?;
                }
            }
            self.say("X - exit\n? - help")?;

            match self.read_choice()? {
                Choice::Number(n) => {
                    let n = n as usize;
                    if n < self.dice.len() && Some(n) != exclude {
                        return Ok(Some(n));
                    }
                    self.say("Invalid input. Try again.")?;
                }
                Choice::Help => self.show_help()?,
                Choice::Exit => return Ok(None),
                Choice::Invalid => self.say("Invalid input. Try again.")?,
            }
        }
    }

    /// Both sides contribute a number; their sum modulo the face count picks the face.
    fn fair_roll(&mut self, die: &Die) -> Result<Option<i64>, String> {
        let faces = u32::try_from(die.face_count()).map_err(|e| e.to_string())?;
        let mut commitment = self.generator.commit(faces).map_err(|e| e.to_string())?;
        let hmac = commitment.disclose().map_err(|e| e.to_string())?;
        self.say(format!(
            "I selected a random value in the range 0..{} (HMAC={hmac}).",
            faces - 1
        ))?;
        self.say(format!(
            "Add your number modulo {faces} to ensure fairness of the roll."
        ))?;

        let mine = loop {
            for i in 0..faces {
                writeln!(self.out, "{i} - {i}").map_err(|e| e.to_string())?;
            }
            self.say("X - exit\n? - help")?;
            match self.read_choice()? {
                Choice::Number(n) if n < faces => break n,
                Choice::Help => self.show_roll_help(faces)?,
                Choice::Exit => return Ok(None),
                Choice::Number(_) | Choice::Invalid => self.say("Invalid input. Try again.")?,
            }
        };

        commitment.contribute(mine).map_err(|e| e.to_string())?;
        let reveal = commitment.reveal().map_err(|e| e.to_string())?;
        let result = reveal.combined();
        self.say(format!(
            "My number is {} (KEY={}).",
            reveal.value(),
            reveal.key_hex()
        ))?;
        self.say(format!(
            "The result is {} + {mine} = {result} (mod {faces}).",
            reveal.value()
        ))?;

        die.face(result as usize)
            .map(Some)
            .ok_or_else(|| format!("face {result} missing from die [{die}]"))
    }

    fn read_choice(&mut self) -> Result<Choice, String> {
        write!(self.out, "Your selection: ").map_err(|e| e.to_string())?;
        self.out.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            // EOF
            writeln!(self.out).map_err(|e| e.to_string())?;
            return Ok(Choice::Exit);
        }

        let input = line.trim();
        Ok(if input.eq_ignore_ascii_case("x") {
            Choice::Exit
        } else if input == "?" {
            Choice::Help
        } else {
            input.parse().map_or(Choice::Invalid, Choice::Number)
        })
    }

    fn show_help(&mut self) -> Result<(), String> {
        self.say("")?;
        self.say("NON-TRANSITIVE DICE GAME HELP".bold())?;
        self.say("In this game you play against the computer using special dice.")?;
        self.say(
            "The dice are non-transitive: if A tends to beat B and B tends to beat C,\n\
             C may still tend to beat A. The player who rolls the higher number wins.",
        )?;
        self.say("")?;
        self.say("Probability of the win for the user:")?;
        let table = probability_table(self.dice, &self.odds);
        self.say(table)?;
        self.say("")
    }

    fn show_roll_help(&mut self, faces: u32) -> Result<(), String> {
        self.say(
            "This is a fair roll. I have already picked a hidden number and shown its HMAC.",
        )?;
        self.say(format!(
            "You add your own number, and the sum modulo {faces} picks the face."
        ))?;
        self.say("After your choice I reveal the key so you can check the HMAC yourself.")
    }

    fn die(&self, index: usize) -> Result<Die, String> {
        self.dice.get(index).cloned().map_err(|e| e.to_string())
    }

    fn say(&mut self, line: impl Display) -> Result<(), String> {
        writeln!(self.out, "{line}").map_err(|e| e.to_string())
    }
}
