use crate::domain::model::Language;

/// User-facing text for one language.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub welcome: &'static str,
    pub menu_title: &'static str,
    pub menu_start: &'static str,
    pub menu_exit: &'static str,
    pub menu_prompt: &'static str,
    pub menu_input_malformed: &'static str,
    pub menu_choice_out_of_range: &'static str,
    pub operation_header: &'static str,
    pub prompt_first: &'static str,
    pub prompt_operator: &'static str,
    pub prompt_second: &'static str,
    pub operand_malformed: &'static str,
    pub operator_malformed: &'static str,
    pub result_label: &'static str,
    pub division_by_zero: &'static str,
    /// `{op}` is replaced by the rejected symbol.
    pub unsupported_operator: &'static str,
    pub farewell: &'static str,
}

const ENGLISH: Messages = Messages {
    welcome: "Welcome to the console calculator!",
    menu_title: "CALCULATOR MENU",
    menu_start: "1. Start a new operation",
    menu_exit: "0. Exit",
    menu_prompt: "Your choice: ",
    menu_input_malformed: "Invalid input. Please enter a number.",
    menu_choice_out_of_range: "Invalid choice. Please choose 1 or 0.",
    operation_header: "--- New operation ---",
    prompt_first: "Enter the first number (A): ",
    prompt_operator: "Enter the operator (+, -, *, /): ",
    prompt_second: "Enter the second number (B): ",
    operand_malformed: "Invalid number.",
    operator_malformed: "Invalid operator input.",
    result_label: "RESULT",
    division_by_zero: "!!! Error: division by zero! !!!",
    unsupported_operator: "!!! Error: unsupported operator ({op}) !!!",
    farewell: "Program finished. Thank you for using the calculator!",
};

const RUSSIAN: Messages = Messages {
    welcome: "Добро пожаловать в ООП-Калькулятор!",
    menu_title: "МЕНЮ КАЛЬКУЛЯТОРА",
    menu_start: "1. Выполнить новую операцию",
    menu_exit: "0. Выйти из программы",
    menu_prompt: "Ваш выбор: ",
    menu_input_malformed: "Неверный ввод. Пожалуйста, введите число.",
    menu_choice_out_of_range: "Неверный выбор. Пожалуйста, выберите 1 или 0.",
    operation_header: "--- Новая операция ---",
    prompt_first: "Введите первое число (A): ",
    prompt_operator: "Введите операцию (+, -, *, /): ",
    prompt_second: "Введите второе число (B): ",
    operand_malformed: "Ошибка ввода числа.",
    operator_malformed: "Ошибка ввода операции.",
    result_label: "РЕЗУЛЬТАТ",
    division_by_zero: "!!! Ошибка: Деление на ноль! !!!",
    unsupported_operator: "!!! Ошибка: Неподдерживаемая операция ({op}) !!!",
    farewell: "Программа завершена. Спасибо за использование!",
};

impl Messages {
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::En => &ENGLISH,
            Language::Ru => &RUSSIAN,
        }
    }

    pub fn unsupported_operator(&self, op: char) -> String {
        self.unsupported_operator.replace("{op}", &op.to_string())
    }
}
