/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The character separating rows in a COI blob
pub const ROW_SEPARATOR: char = '|';

/// Number of characters making up one color token
pub const TOKEN_LENGTH: usize = 8;
