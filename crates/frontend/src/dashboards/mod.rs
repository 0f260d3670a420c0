pub mod d400_bookkeeping;
