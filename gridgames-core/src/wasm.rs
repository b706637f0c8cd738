//! WASM bindings for gridgames-core
//!
//! Provides a JavaScript-friendly API for the game logic. Tokens cross the
//! boundary as numbers: 0 (empty / no winner), 1 or 2.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::{connect4, tictactoe, token, HeuristicAi, Player};

fn player_from_js(player: u8) -> Result<Player, JsError> {
    Player::from_bits(player).ok_or_else(|| JsError::new(&format!("invalid player {player}")))
}

/// WASM-friendly wrapper around the tic-tac-toe board
#[wasm_bindgen]
pub struct WasmTicTacToe {
    inner: tictactoe::Board,
}

#[wasm_bindgen]
impl WasmTicTacToe {
    /// Create a new empty board
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTicTacToe {
        WasmTicTacToe { inner: tictactoe::Board::new() }
    }

    /// Place a token. Returns false if the cell is taken.
    #[wasm_bindgen(js_name = setCell)]
    pub fn set_cell(&mut self, cell: usize, player: u8) -> Result<bool, JsError> {
        if cell >= tictactoe::CELLS {
            return Err(JsError::new(&format!("cell {cell} out of range")));
        }
        Ok(self.inner.set_cell(cell, player_from_js(player)?))
    }

    #[wasm_bindgen(js_name = hasEmptyCells)]
    pub fn has_empty_cells(&self) -> bool {
        self.inner.has_empty_cells()
    }

    /// Check for winner. Returns 0 (none), 1 or 2
    #[wasm_bindgen(js_name = hasWinner)]
    pub fn has_winner(&self) -> u8 {
        token(self.inner.check_winner())
    }

    /// Cell tokens in index order
    pub fn cells(&self) -> Vec<u8> {
        self.inner.tokens().to_vec()
    }

    /// Heuristic scores as an array of numbers, null for occupied cells
    pub fn scores(&self) -> Result<JsValue, JsError> {
        let scores = HeuristicAi::default().scores(&self.inner);
        Ok(serde_wasm_bindgen::to_value(&scores.to_vec())?)
    }

    /// Cell chosen by the computer player (player 2).
    /// `seed` drives tie-breaking; pass a fresh random number per call.
    /// Returns -1 if the board is full.
    #[wasm_bindgen(js_name = selectCell)]
    pub fn select_cell(&self, seed: u64) -> i32 {
        let mut rng = StdRng::seed_from_u64(seed);
        HeuristicAi::default()
            .select_cell(&self.inner, &mut rng)
            .map_or(-1, |cell| cell as i32)
    }

    /// Clone the board
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_board(&self) -> WasmTicTacToe {
        WasmTicTacToe { inner: self.inner }
    }
}

impl Default for WasmTicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

/// WASM-friendly wrapper around the connect-four board
#[wasm_bindgen]
pub struct WasmConnectFour {
    inner: connect4::Board,
}

#[wasm_bindgen]
impl WasmConnectFour {
    /// Create a new empty board
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConnectFour {
        WasmConnectFour { inner: connect4::Board::new() }
    }

    /// Drop a token into a column. Returns false if the column is full.
    #[wasm_bindgen(js_name = addToColumn)]
    pub fn add_to_column(&mut self, column: usize, player: u8) -> Result<bool, JsError> {
        if column >= connect4::COLS {
            return Err(JsError::new(&format!("column {column} out of range")));
        }
        Ok(self.inner.add_to_column(column, player_from_js(player)?))
    }

    /// Winner through the top token of `column`: 0 (none), 1 or 2
    #[wasm_bindgen(js_name = hasWinner)]
    pub fn has_winner(&self, column: usize) -> Result<u8, JsError> {
        if column >= connect4::COLS {
            return Err(JsError::new(&format!("column {column} out of range")));
        }
        Ok(token(self.inner.check_winner(column)))
    }

    #[wasm_bindgen(js_name = hasEmptyCells)]
    pub fn has_empty_cells(&self) -> bool {
        self.inner.has_empty_cells()
    }

    /// Cell tokens in index order (column + row * 7, row 0 at the bottom)
    pub fn cells(&self) -> Vec<u8> {
        self.inner.tokens().to_vec()
    }

    /// Clone the board
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_board(&self) -> WasmConnectFour {
        WasmConnectFour { inner: self.inner }
    }
}

impl Default for WasmConnectFour {
    fn default() -> Self {
        Self::new()
    }
}
