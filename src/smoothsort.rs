//! Dijkstra's smoothsort.
//!
//! The unsorted prefix is kept as a forest of heap-ordered Leonardo trees laid
//! out left to right, largest first. `p` records which tree sizes are present
//! (lowest bit = rightmost tree) and `(b, c)` is the pair `(L(k), L(k-1))` of
//! the rightmost tree. The pair is signed: stepping down from `(1, 1)` yields
//! `(1, -1)`, i.e. `L(-1) = -1`, and stepping up again restores it.

#[inline]
fn up(b: &mut isize, c: &mut isize) {
    let t = *b;
    *b += *c + 1;
    *c = t;
}

#[inline]
fn down(b: &mut isize, c: &mut isize) {
    let t = *c;
    *c = *b - *c - 1;
    *b = t;
}

/// Registers of one smoothsort run. Lives for a single call only.
struct Smooth<'a, T> {
    arr: &'a mut [T],
    // elements added to (build) or remaining in (extract) the forest
    q: usize,
    // root of the rightmost tree
    r: isize,
    p: u64,
    b: isize,
    c: isize,
    // cursor of the sift/trinkle in progress
    r1: isize,
    b1: isize,
    c1: isize,
}

impl<'a, T: Ord + Copy> Smooth<'a, T> {
    fn new(arr: &'a mut [T]) -> Self {
        Smooth {
            arr,
            q: 1,
            r: 0,
            p: 1,
            b: 1,
            c: 1,
            r1: 0,
            b1: 0,
            c1: 0,
        }
    }

    #[inline]
    fn at(&self, i: isize) -> T {
        self.arr[i as usize]
    }

    #[inline]
    fn set(&mut self, i: isize, value: T) {
        self.arr[i as usize] = value;
    }

    /// Sinks the root at `r1` into its tree of size `b1`.
    fn sift(&mut self) {
        let r0 = self.r1;
        let t = self.at(r0);
        while self.b1 >= 3 {
            let mut r2 = self.r1 - self.b1 + self.c1;
            if self.at(self.r1 - 1) > self.at(r2) {
                r2 = self.r1 - 1;
                down(&mut self.b1, &mut self.c1);
            }
            if self.at(r2) <= t {
                self.b1 = 1;
            } else {
                let v = self.at(r2);
                self.set(self.r1, v);
                self.r1 = r2;
                down(&mut self.b1, &mut self.c1);
            }
        }
        if self.r1 != r0 {
            self.set(self.r1, t);
        }
    }

    /// Moves the root at `r1` left along the tree roots until the roots are
    /// ascending again, then sifts it into the tree where it stopped.
    fn trinkle(&mut self) {
        let mut p1 = self.p;
        self.b1 = self.b;
        self.c1 = self.c;
        let r0 = self.r1;
        let t = self.at(r0);
        while p1 > 0 {
            while p1 & 1 == 0 {
                p1 >>= 1;
                up(&mut self.b1, &mut self.c1);
            }
            let r3 = self.r1 - self.b1;
            if p1 == 1 || self.at(r3) <= t {
                p1 = 0;
            } else {
                p1 -= 1;
                if self.b1 == 1 {
                    let v = self.at(r3);
                    self.set(self.r1, v);
                    self.r1 = r3;
                } else if self.b1 >= 3 {
                    let mut r2 = self.r1 - self.b1 + self.c1;
                    if self.at(self.r1 - 1) > self.at(r2) {
                        r2 = self.r1 - 1;
                        down(&mut self.b1, &mut self.c1);
                        p1 <<= 1;
                    }
                    if self.at(r2) <= self.at(r3) {
                        let v = self.at(r3);
                        self.set(self.r1, v);
                        self.r1 = r3;
                    } else {
                        let v = self.at(r2);
                        self.set(self.r1, v);
                        self.r1 = r2;
                        down(&mut self.b1, &mut self.c1);
                        p1 = 0;
                    }
                }
            }
        }
        if r0 != self.r1 {
            self.set(self.r1, t);
        }
        self.sift();
    }

    /// Exposed child root at `r`: compare with the root of the tree to its
    /// left and trinkle if they are out of order.
    fn semitrinkle(&mut self) {
        self.r1 = self.r - self.c;
        if self.at(self.r1) > self.at(self.r) {
            self.arr.swap(self.r as usize, self.r1 as usize);
            self.trinkle();
        }
    }

    fn build(&mut self) {
        let n = self.arr.len();
        while self.q < n {
            self.r1 = self.r;
            if self.p & 7 == 3 {
                // the two rightmost trees merge with the new element as root
                self.b1 = self.b;
                self.c1 = self.c;
                self.sift();
                self.p = (self.p + 1) >> 2;
                up(&mut self.b, &mut self.c);
                up(&mut self.b, &mut self.c);
            } else if self.p & 3 == 1 {
                // the rightmost tree only gets merged later if enough elements follow
                if self.q as isize + self.c < n as isize {
                    self.b1 = self.b;
                    self.c1 = self.c;
                    self.sift();
                } else {
                    self.trinkle();
                }
                down(&mut self.b, &mut self.c);
                self.p <<= 1;
                while self.b > 1 {
                    down(&mut self.b, &mut self.c);
                    self.p <<= 1;
                }
                self.p += 1;
            }
            self.q += 1;
            self.r += 1;
        }
        self.r1 = self.r;
        self.trinkle();
    }

    fn extract(&mut self) {
        while self.q > 1 {
            self.q -= 1;
            if self.b == 1 {
                // singleton root is already in place
                self.r -= 1;
                self.p -= 1;
                while self.p & 1 == 0 {
                    self.p >>= 1;
                    up(&mut self.b, &mut self.c);
                }
            } else if self.b >= 3 {
                // drop the root, its two children become trees of their own
                self.p -= 1;
                self.r = self.r - self.b + self.c;
                if self.p > 0 {
                    self.semitrinkle();
                }
                down(&mut self.b, &mut self.c);
                self.p = (self.p << 1) + 1;
                self.r += self.c;
                self.semitrinkle();
                down(&mut self.b, &mut self.c);
                self.p = (self.p << 1) + 1;
            }
        }
    }
}

pub fn smooth_sort<T: Ord + Copy>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mut smooth = Smooth::new(arr);
    smooth.build();
    smooth.extract();
}
