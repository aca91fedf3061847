use crate::core::input::TokenReader;
use crate::core::messages::Messages;
use crate::core::Evaluator;
use crate::domain::model::{
    Language, MenuChoice, OperationRequest, SessionState, SessionSummary,
};
use crate::utils::error::{EvalError, InputError, Operand, Result};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

const MENU_RULE: &str = "=======================================";
const MENU_SEPARATOR: &str = "---------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellSettings {
    /// Digits after the decimal point in result lines.
    pub precision: usize,
    pub language: Language,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            precision: 2,
            language: Language::En,
        }
    }
}

/// The input stream plus the output and diagnostic streams of a session.
pub struct Console<R, W, E> {
    input: TokenReader<R>,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            err,
        }
    }
}

/// Renders `A <op> B = R` with every number in fixed-point notation.
pub fn format_result(request: &OperationRequest, result: f64, precision: usize) -> String {
    format!(
        "{:.p$} {} {:.p$} = {:.p$}",
        request.operand_a,
        request.operator,
        request.operand_b,
        result,
        p = precision
    )
}

/// The interactive menu loop.
pub struct Shell<V, R, W, E> {
    evaluator: V,
    console: Console<R, W, E>,
    settings: ShellSettings,
    messages: &'static Messages,
    summary: SessionSummary,
}

impl<V, R, W, E> Shell<V, R, W, E>
where
    V: Evaluator,
    R: BufRead,
    W: Write,
    E: Write,
{
    pub fn new(evaluator: V, console: Console<R, W, E>, settings: ShellSettings) -> Self {
        Self {
            evaluator,
            console,
            settings,
            messages: Messages::for_language(settings.language),
            summary: SessionSummary::default(),
        }
    }

    /// Runs the session until the user exits or the input ends.
    pub fn run(&mut self) -> Result<SessionSummary> {
        tracing::info!(
            "Starting calculator session (precision {}, language {:?})",
            self.settings.precision,
            self.settings.language
        );
        writeln!(self.console.out, "{}", self.messages.welcome)?;

        let mut state = SessionState::AwaitingMenuChoice;
        while state != SessionState::Terminated {
            state = match state {
                SessionState::AwaitingMenuChoice => self.await_menu_choice()?,
                SessionState::RunningOperation => self.run_operation()?,
                SessionState::Terminated => SessionState::Terminated,
            };
        }

        writeln!(self.console.out, "\n{}", self.messages.farewell)?;
        self.console.out.flush()?;

        tracing::info!(
            "Session finished: {} operations, {} input errors, {} evaluation errors",
            self.summary.operations_completed,
            self.summary.input_errors,
            self.summary.evaluation_errors
        );
        Ok(self.summary)
    }

    fn await_menu_choice(&mut self) -> Result<SessionState> {
        self.display_menu()?;

        let next = match self.read_menu_choice()? {
            None | Some(MenuChoice::Exit) => SessionState::Terminated,
            Some(MenuChoice::StartOperation) => SessionState::RunningOperation,
            Some(MenuChoice::Invalid) => SessionState::AwaitingMenuChoice,
        };
        Ok(next)
    }

    fn display_menu(&mut self) -> Result<()> {
        let out = &mut self.console.out;
        writeln!(out, "\n{}", MENU_RULE)?;
        writeln!(out, "          {}", self.messages.menu_title)?;
        writeln!(out, "{}", MENU_RULE)?;
        writeln!(out, "{}", self.messages.menu_start)?;
        writeln!(out, "{}", self.messages.menu_exit)?;
        writeln!(out, "{}", MENU_SEPARATOR)?;
        write!(out, "{}", self.messages.menu_prompt)?;
        out.flush()?;
        Ok(())
    }

    // `None` means the input is exhausted.
    fn read_menu_choice(&mut self) -> Result<Option<MenuChoice>> {
        let Some(token) = self.console.input.next_token()? else {
            return Ok(None);
        };

        let value = match token.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                let message = self.messages.menu_input_malformed;
                self.report_input_error(InputError::MenuInputMalformed(token), message)?;
                return Ok(Some(MenuChoice::Invalid));
            }
        };

        let choice = MenuChoice::from_value(value);
        if choice == MenuChoice::Invalid {
            let message = self.messages.menu_choice_out_of_range;
            self.report_input_error(InputError::MenuChoiceOutOfRange(value), message)?;
        }
        Ok(Some(choice))
    }

    fn run_operation(&mut self) -> Result<SessionState> {
        writeln!(self.console.out, "\n{}", self.messages.operation_header)?;

        let operand_a = match self.read_operand(Operand::First)? {
            ControlFlow::Continue(value) => value,
            ControlFlow::Break(state) => return Ok(state),
        };
        let operator = match self.read_operator()? {
            ControlFlow::Continue(symbol) => symbol,
            ControlFlow::Break(state) => return Ok(state),
        };
        let operand_b = match self.read_operand(Operand::Second)? {
            ControlFlow::Continue(value) => value,
            ControlFlow::Break(state) => return Ok(state),
        };

        let request = OperationRequest {
            operand_a,
            operand_b,
            operator,
        };
        tracing::debug!("Evaluating {:?}", request);

        match self.evaluator.evaluate(&request) {
            Ok(result) => {
                self.summary.operations_completed += 1;
                writeln!(
                    self.console.out,
                    "\n=> {}: {}",
                    self.messages.result_label,
                    format_result(&request, result, self.settings.precision)
                )?;
            }
            Err(error) => {
                self.summary.evaluation_errors += 1;
                tracing::debug!("Evaluation failed: {}", error);
                let message = match error {
                    EvalError::DivisionByZero => self.messages.division_by_zero.to_string(),
                    EvalError::UnsupportedOperator(op) => self.messages.unsupported_operator(op),
                };
                self.console.out.flush()?;
                writeln!(self.console.err, "{}", message)?;
                self.console.err.flush()?;
            }
        }

        Ok(SessionState::AwaitingMenuChoice)
    }

    fn read_operand(&mut self, operand: Operand) -> Result<ControlFlow<SessionState, f64>> {
        let prompt = match operand {
            Operand::First => self.messages.prompt_first,
            Operand::Second => self.messages.prompt_second,
        };
        self.prompt(prompt)?;

        let message = self.messages.operand_malformed;
        let Some(token) = self.console.input.next_token()? else {
            self.report_input_error(InputError::OperandInputMissing(operand), message)?;
            return Ok(ControlFlow::Break(SessionState::Terminated));
        };

        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(ControlFlow::Continue(value)),
            _ => {
                self.report_input_error(InputError::OperandInputMalformed { operand, token }, message)?;
                Ok(ControlFlow::Break(SessionState::AwaitingMenuChoice))
            }
        }
    }

    fn read_operator(&mut self) -> Result<ControlFlow<SessionState, char>> {
        self.prompt(self.messages.prompt_operator)?;

        match self.console.input.next_char()? {
            Some(symbol) => Ok(ControlFlow::Continue(symbol)),
            None => {
                let message = self.messages.operator_malformed;
                self.report_input_error(InputError::OperatorInputMissing, message)?;
                Ok(ControlFlow::Break(SessionState::Terminated))
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.console.out, "{}", text)?;
        self.console.out.flush()?;
        Ok(())
    }

    // Abandons whatever is left on the offending line.
    fn report_input_error(&mut self, error: InputError, message: &str) -> Result<()> {
        tracing::debug!("Input error: {}", error);
        self.summary.input_errors += 1;
        writeln!(self.console.out, "{}", message)?;
        self.console.input.discard_line();
        Ok(())
    }
}
