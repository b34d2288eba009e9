//! Built-in prompts for GUI next-action prediction.
//!
//! The action-space wording is a contract with the grounding model; it
//! matches the vocabulary the model was trained against and must not be
//! rephrased casually.

/// System prompt sent with single-screenshot queries.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Fixed instruction describing the seven-action GUI vocabulary.
pub const DEFAULT_ACTION_INSTRUCTION: &str = "\
You are an assistant trained to navigate the desktop screen.
Given a task instruction, a screen observation, and an action history sequence,
output the next action and wait for the next observation.
Here is the action space:
1. CLICK: Click on an element, value is not applicable and the position [x,y] is required.
2. INPUT: Type a string into an element, value is a string to type and the position [x,y] is required.
3. HOVER: Hover on an element, value is not applicable and the position [x,y] is required.
4. ENTER: Enter operation, value and position are not applicable.
5. SCROLL: Scroll the screen, value is the direction to scroll and the position is not applicable.
6. ESC: ESCAPE operation, value and position are not applicable.
7. PRESS: Long click on an element, value is not applicable and the position [x,y] is required.";
